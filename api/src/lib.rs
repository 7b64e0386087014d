use std::{env, sync::Arc};

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use axum::{Router, middleware, routing::post};
use tokio::signal;

use crate::routes::generate_answer::generate_answer_route::generate_answer;

/// Boot the gateway: load config, build the client, bind, and serve.
///
/// Configuration failures return before any listener exists.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::boot()?);

    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    tracing::info!(%host_url, "answer gateway listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Assemble the router; shared with the integration tests.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate_answer", post(generate_answer))
        .layer(middleware::from_fn(
            middleware_layer::json_extractor::json_error_mapper,
        ))
        .with_state(state)
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
