use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServiceMode;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// `/suggest` handlers for the configured service mode
fn suggest_route(mode: ServiceMode) -> MethodRouter<AppState> {
    match mode {
        ServiceMode::Weather => get(handlers::suggest_from_weather),
        ServiceMode::Supplied => {
            get(handlers::suggest_supplied_query).post(handlers::suggest_supplied_body)
        }
    }
}

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/suggest", suggest_route(state.mode))
        .layer(
            // Request ID is assigned before the trace span is created
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
