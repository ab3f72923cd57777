//! Plain HTTP application server

use std::net::TcpListener;

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::Router;
use axum_server::Handle;
use tracing::{debug, info};

use crate::{
    domain::communication::emails::EmailService,
    infrastructure::http::{router, shutdown_signal, state::AppState, HttpServerConfig, Server},
};

/// The application's HTTP server
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the address in `config`.
    pub fn new(config: &HttpServerConfig, state: AppState<impl EmailService>) -> Result<Self> {
        let address = config.address();

        let listener = TcpListener::bind(address)
            .with_context(|| format!("failed to listen on {address}"))?;

        listener
            .set_nonblocking(true)
            .context("failed to make listener non-blocking")?;

        Ok(Self {
            router: router(state),
            listener,
        })
    }
}

#[async_trait]
impl Server for HttpServer {
    /// Runs the HTTP server.
    #[mutants::skip]
    async fn run(self) -> Result<()> {
        info!(
            "HTTP server listening on {}",
            self.listener
                .local_addr()
                .context("failed to get local address")?
        );

        let handle = Handle::new();

        tokio::spawn(shutdown_signal(handle.clone()));

        axum_server::from_tcp(self.listener)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await
            .context("server error")?;

        debug!("HTTP server stopped");

        Ok(())
    }
}
