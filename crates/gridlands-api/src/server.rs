//! HTTP server lifecycle management for the map query API.

use std::net::SocketAddr;
use std::sync::Arc;

use gridlands_db::GridStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8090,
        }
    }
}

/// Errors that can occur when starting or running the API server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Start the API server and block until it exits.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the listener cannot bind and
/// [`ServerError::Serve`] on a fatal I/O error.
pub async fn start_server<S: GridStore + 'static>(
    config: &ServerConfig,
    state: Arc<AppState<S>>,
) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, state).await
}

/// Bind the listener, then serve in a background task.
///
/// Binding happens before the task is spawned so startup fails loudly when
/// the port is taken. The returned handle resolves if the server ever
/// exits.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the listener cannot bind.
pub async fn spawn_server<S: GridStore + 'static>(
    config: &ServerConfig,
    state: Arc<AppState<S>>,
) -> Result<tokio::task::JoinHandle<Result<(), ServerError>>, ServerError> {
    let listener = bind(config).await?;
    Ok(tokio::spawn(serve(listener, state)))
}

async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Query API listening");
    Ok(listener)
}

async fn serve<S: GridStore + 'static>(
    listener: TcpListener,
    state: Arc<AppState<S>>,
) -> Result<(), ServerError> {
    let router = build_router(state);
    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))
}
