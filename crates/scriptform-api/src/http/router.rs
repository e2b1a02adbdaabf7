//! Axum router configuration with middleware.
//!
//! `/` serves the HTML form, `/api/v1/` the JSON API.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::ServeState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: ServeState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/form", get(handlers::form::get_form))
        .route("/replay", post(handlers::form::replay));

    Router::new()
        .route(
            "/",
            get(handlers::page::show_form).post(handlers::page::submit_form),
        )
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
