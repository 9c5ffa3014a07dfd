#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod dto;
mod error;
pub mod handlers;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use stringlens_core::StringService;
use tracing::info;

pub use error::ApiError;
pub use handlers::AppState;

/// Build the HTTP router over a string service.
pub fn router(service: Arc<StringService>) -> Router {
    Router::new()
        .route(
            "/strings",
            get(handlers::list_strings).post(handlers::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::filter_by_natural_language),
        )
        .route(
            "/strings/{value}",
            get(handlers::get_string).delete(handlers::delete_string),
        )
        .with_state(service)
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn serve(service: Arc<StringService>, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl-C, shutting down");
    }
}
