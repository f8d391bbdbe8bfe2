//! HTTP server bootstrap with graceful shutdown

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::adapters::database::ClinicStore;
use crate::api::router::build_router;
use crate::api::types::AppState;
use crate::config::MyClinicConfig;
use crate::domain::{ClinicError, Result};

/// Serves the API until `shutdown` flips to `true`
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns `ClinicError::Io` if the listener cannot bind or the server fails.
pub async fn serve(
    config: &MyClinicConfig,
    store: Arc<dyn ClinicStore>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let state = AppState::new(store, &config.auth);
    let app = build_router(state, &config.server);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ClinicError::Io(format!("Failed to bind {address}: {e}")))?;

    tracing::info!(
        address = %address,
        require_session = config.auth.require_session,
        "MyClinic server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // A dropped sender also ends the wait
            let _ = shutdown.wait_for(|stop| *stop).await;
            tracing::info!("Shutdown signal received, draining connections");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
