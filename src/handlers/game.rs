use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::GuessRequest;
use crate::service::GameService;

pub fn router() -> Router<GameService> {
    Router::new()
        .route("/search/models", get(search_models))
        .route("/game-state", get(game_state))
        .route("/guess", post(submit_guess))
        .route("/cars/count", get(car_count))
        .route("/daily-car/rotate", post(rotate_daily_car))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: Option<String>,
}

async fn search_models(
    State(service): State<GameService>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let query = params.query.unwrap_or_default();
    if query.is_empty() {
        // Nothing typed yet is not an error, just no suggestions.
        return Ok(Json(json!([])));
    }

    let results = service.search_models(&query).await.map_err(AppError::Internal)?;
    Ok(Json(serde_json::to_value(results)?))
}

async fn game_state(
    State(service): State<GameService>,
) -> Result<Json<serde_json::Value>, AppError> {
    let has_game = service.has_game_today().await.map_err(AppError::Internal)?;
    Ok(Json(json!({
        "hasGame": has_game,
        "dbConnected": true
    })))
}

async fn submit_guess(
    State(service): State<GameService>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::info!("{} Received guess: {}", API_NAME, request.model);

    let report = service
        .process_guess(&request.model)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(serde_json::to_value(report)?))
}

async fn car_count(
    State(service): State<GameService>,
) -> Result<Json<serde_json::Value>, AppError> {
    let count = service.car_count().await.map_err(AppError::Internal)?;
    Ok(Json(json!({ "count": count })))
}

async fn rotate_daily_car(
    State(service): State<GameService>,
) -> Result<Json<serde_json::Value>, AppError> {
    let car_id = service.rotate_daily_car().await.map_err(AppError::Internal)?;
    Ok(Json(json!({
        "success": true,
        "message": "New daily car selected",
        "carId": car_id
    })))
}
