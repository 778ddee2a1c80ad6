//! HTTP server initialization and runtime setup.
//!
//! Builds the store chosen by configuration, wires up the service layer,
//! and runs the Axum server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::LinkStore;
use crate::infrastructure::storage::{FileStore, MemoryStore};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// The store variant is selected here, once: file-backed by default, pure
/// in-memory with `--in-memory`. Opening the storage log replays every
/// record; a corrupt or unreadable log aborts startup rather than serving
/// from partial data.
///
/// # Errors
///
/// Returns an error if the storage log cannot be opened or replayed, the
/// listen address is invalid, the bind fails, or the server errors at
/// runtime.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn LinkStore> = if config.in_memory {
        tracing::info!("Storage: in-memory only");
        Arc::new(MemoryStore::new())
    } else {
        let store = FileStore::open(&config.file_storage_path).with_context(|| {
            format!(
                "Failed to open storage log at {}",
                config.file_storage_path.display()
            )
        })?;
        tracing::info!(
            path = %config.file_storage_path.display(),
            links = store.len(),
            "Storage: durable log replayed"
        );
        Arc::new(store)
    };

    let link_service = Arc::new(LinkService::new(store, config.base_url.clone()));
    let state = AppState { link_service };

    let app = app_router(state);

    let addr: SocketAddr = config
        .server_address
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_address))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
