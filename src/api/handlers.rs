use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::middleware::request_id::RequestId;
use crate::models::{
    SuggestRequest, SuppliedSuggestResponse, WeatherSuggestQuery, WeatherSuggestResponse,
};
use crate::services::suggestion;

use super::AppState;

pub const HOME_MESSAGE: &str = "Weather-Based Outfit Recommendation API is running!";

/// Liveness message
pub async fn home() -> Json<Value> {
    Json(json!({ "message": HOME_MESSAGE }))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Suggest an outfit for the season detected from the caller's weather
pub async fn suggest_from_weather(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<WeatherSuggestQuery>,
) -> Json<WeatherSuggestResponse> {
    tracing::info!(request_id = %request_id, event = %query.event, "Processing weather suggestion");

    let response = suggestion::suggest_from_weather(
        &state.dataset,
        state.location_provider.as_ref(),
        state.weather_provider.as_ref(),
        &query.event,
    )
    .await;

    Json(response)
}

/// Suggest an outfit for an event and optional season given in the query string
pub async fn suggest_supplied_query(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(request): Query<SuggestRequest>,
) -> Json<SuppliedSuggestResponse> {
    tracing::info!(request_id = %request_id, event = %request.event, "Processing suggestion query");
    Json(suggestion::suggest_supplied(&state.dataset, request))
}

/// Suggest an outfit for an event and optional season given as JSON
pub async fn suggest_supplied_body(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SuggestRequest>,
) -> Json<SuppliedSuggestResponse> {
    tracing::info!(request_id = %request_id, event = %request.event, "Processing suggestion body");
    Json(suggestion::suggest_supplied(&state.dataset, request))
}
