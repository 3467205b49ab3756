use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::RecommendationResponse,
    services::recommendations,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub title: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// All catalog titles, in catalog order
pub async fn list_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.recommender.titles())
}

/// Recommend movies similar to the given title
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let title = match params.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(AppError::InvalidInput("Title cannot be empty".to_string())),
    };

    tracing::info!(
        request_id = %request_id,
        title = %title,
        "Processing recommendation request"
    );

    let response =
        recommendations::recommend_with_details(&state.recommender, &state.enricher, &title)
            .await?;

    tracing::info!(
        request_id = %request_id,
        results = response.recommendations.len(),
        notices = response.notices.len(),
        "Recommendation request completed"
    );

    Ok(Json(response))
}
