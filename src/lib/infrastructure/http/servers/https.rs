//! HTTPS application server

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use axum::Router;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tracing::{debug, info};

use crate::{
    domain::communication::emails::EmailService,
    infrastructure::http::{router, shutdown_signal, state::AppState, HttpServerConfig, Server},
};

/// The application's HTTPS server
#[derive(Debug)]
pub struct HttpsServer {
    router: Router,
    address: SocketAddr,
    tls_config: RustlsConfig,
}

impl HttpsServer {
    /// Returns a new HTTPS server using the certificate and key in `config`.
    pub async fn new(
        config: &HttpServerConfig,
        state: AppState<impl EmailService>,
    ) -> Result<Self> {
        let (Some(cert_path), Some(key_path)) = (&config.cert_path, &config.key_path) else {
            return Err(anyhow!("HTTPS needs both a certificate and a key"));
        };

        // Ignore the error raised when a provider is already installed
        let _ = rustls::crypto::ring::default_provider().install_default();

        let tls_config = RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .context("failed to load TLS config")?;

        Ok(Self {
            router: router(state),
            address: config.address(),
            tls_config,
        })
    }
}

#[async_trait]
impl Server for HttpsServer {
    /// Runs the HTTPS server.
    #[mutants::skip]
    async fn run(self) -> Result<()> {
        info!("HTTPS server listening on {}", self.address);

        let handle = Handle::new();

        tokio::spawn(shutdown_signal(handle.clone()));

        axum_server::bind_rustls(self.address, self.tls_config)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await
            .context("server error")?;

        debug!("HTTPS server stopped");

        Ok(())
    }
}
