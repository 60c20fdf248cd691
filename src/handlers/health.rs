use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;

use crate::error::AppError;
use crate::service::GameService;

pub fn router() -> Router<GameService> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(
    State(service): State<GameService>,
) -> Result<Json<serde_json::Value>, AppError> {
    let now = service.ping_database().await?;
    Ok(Json(json!({
        "status": "ok",
        "database": "connected",
        "timestamp": now
    })))
}
