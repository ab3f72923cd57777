//! HTTP Server

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::Result;
use async_trait::async_trait;
use axum::{extract::Request, routing::get, Router};
use axum_server::Handle;
use clap::Parser;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{debug, info_span};

use crate::domain::communication::emails::EmailService;

use self::{
    handlers::{compose, panic_handler, v1},
    state::AppState,
};

mod errors;
mod handlers;
mod open_api;

pub mod servers;
pub mod state;

/// Default limit for send request bodies. Attachments travel base64 encoded,
/// so this allows roughly 18 MiB of files per email.
pub const DEFAULT_BODY_LIMIT: usize = 25 * 1024 * 1024;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The address to listen on
    #[arg(long, env = "SERVER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// The port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "2022")]
    pub port: u16,

    /// PEM certificate; serves HTTPS when given together with a key
    #[arg(long, env = "TLS_CERT_PATH", requires = "key_path")]
    pub cert_path: Option<String>,

    /// PEM private key
    #[arg(long, env = "TLS_KEY_PATH", requires = "cert_path")]
    pub key_path: Option<String>,

    /// Largest accepted send request body, in bytes
    #[arg(long, env = "BODY_LIMIT", default_value_t = DEFAULT_BODY_LIMIT)]
    pub body_limit: usize,
}

impl HttpServerConfig {
    /// The socket address to bind
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// A runnable server
#[async_trait]
pub trait Server: Send + Sized {
    /// Serve requests until a shutdown signal arrives
    async fn run(self) -> Result<()>;
}

/// Create the application's router
pub fn router<E: EmailService>(state: AppState<E>) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Router::new()
        .route("/", get(compose::handler))
        .nest("/api/v1", v1::router::<E>(state.body_limit))
        .layer(CatchPanicLayer::custom(panic_handler))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(trace_layer)
        .with_state(state)
}

#[mutants::skip]
async fn shutdown_signal(handle: Handle) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    debug!("shutting down gracefully");
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
