use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{LoanApplication, PredictionId};
use super::repository::{PredictionRepository, RepositoryError};
use super::service::{LoanPredictionService, LoanServiceError};

/// Router builder exposing HTTP endpoints for submission and lookup.
pub fn lending_router<R>(service: Arc<LoanPredictionService<R>>) -> Router
where
    R: PredictionRepository + 'static,
{
    Router::new()
        .route("/api/v1/loans/predictions", post(submit_handler::<R>))
        .route(
            "/api/v1/loans/predictions/:prediction_id",
            get(prediction_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<LoanPredictionService<R>>>,
    axum::Json(application): axum::Json<LoanApplication>,
) -> Response
where
    R: PredictionRepository + 'static,
{
    let delay = service.processing_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match service.submit(application) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(LoanServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(LoanServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "prediction already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn prediction_handler<R>(
    State(service): State<Arc<LoanPredictionService<R>>>,
    Path(prediction_id): Path<String>,
) -> Response
where
    R: PredictionRepository + 'static,
{
    let id = PredictionId(prediction_id);
    match service.fetch(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(LoanServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "prediction not found",
                "prediction_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
