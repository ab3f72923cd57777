#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Mail outbox server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use mail_outbox::{
    domain::communication::emails::EmailServiceImpl,
    infrastructure::{
        database::sqlite::{DatabaseConnectionDetails, SqliteDatabase},
        http::{
            servers::{http::HttpServer, https::HttpsServer},
            state::AppState,
            HttpServerConfig, Server,
        },
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The database connection details
    #[clap(flatten)]
    pub db: DatabaseConnectionDetails,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    // a missing .env file is fine, the environment may already be set
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let db = SqliteDatabase::new(&args.db.connection_string).await?;
    info!("using database {}", args.db.connection_string);

    let state = AppState::new(EmailServiceImpl::new(Arc::new(db)))
        .with_body_limit(args.server.body_limit);

    if args.server.cert_path.is_some() && args.server.key_path.is_some() {
        HttpsServer::new(&args.server, state).await?.run().await
    } else {
        HttpServer::new(&args.server, state)?.run().await
    }
}
