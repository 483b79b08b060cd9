//! PromptZip HTTP API (Axum).
//!
//! Exposes the translation pipeline as named actions over JSON: direct
//! endpoints per action plus a generic dispatch endpoint that carries the
//! action name in the request body.

pub mod batch;
pub mod dispatch;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with default state.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::api_routes())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "pz-server listening");
    axum::serve(listener, app()).await?;
    Ok(())
}

#[cfg(test)]
mod tests;
