//! Process startup: wire adapters into the router and serve until shutdown.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::adapters::crypto::AesEcbCipher;
use crate::adapters::http::{build_router, PaymentAppState};
use crate::config::{AppConfig, ValidationError};
use crate::domain::payment::{GatewaySettings, PaymentError};
use crate::ports::CipherError;

/// Errors that abort startup or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("cipher setup failed: {0}")]
    Cipher(#[from] CipherError),

    #[error("gateway setup failed: {0}")]
    Gateway(#[from] PaymentError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validate `config`, bind the listener, and serve until SIGINT or SIGTERM.
pub async fn start_server(config: AppConfig) -> Result<(), ServerError> {
    config.validate()?;

    let cipher = AesEcbCipher::from_config(&config.gateway)?;
    let gateway = GatewaySettings::from_config(&config.gateway)?;
    let state = PaymentAppState::new(Arc::new(cipher), gateway);
    let app = build_router(state, &config.server);

    let address = config.server.socket_addr()?;
    info!(%address, "Binding listener");
    let listener = TcpListener::bind(address).await?;

    info!(
        %address,
        merchant_id = %config.gateway.merchant_id,
        environment = ?config.server.environment,
        "Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
