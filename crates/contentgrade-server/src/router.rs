//! Router assembly for the contentgrade HTTP API.
//!
//! [`build_router`] wires handler functions to their routes with CORS and
//! tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// The grading route answers every method other than POST with the JSON
/// 405 body instead of axum's empty default. CORS is permissive so browser
/// front-ends on other origins can call it.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health::health))
        .route(
            "/api/grade",
            post(handlers::grade::grade).fallback(handlers::grade::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
