use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id_middleware, request_span};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        // Request ids must be assigned before the trace span reads them
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::list_movies))
        .route("/movies/recommendations", get(handlers::recommend))
        .route(
            "/categories/:field/values",
            get(handlers::list_category_values),
        )
        .route(
            "/categories/:field/titles",
            get(handlers::filter_by_category),
        )
}
