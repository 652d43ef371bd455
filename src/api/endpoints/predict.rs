//! Symptom prediction endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SymptomRequest};
use crate::prediction::PredictionResult;

/// `POST /predict` — triage a free-text symptom description.
///
/// Validation stops empty input here; past this point the predictor
/// always produces a populated result.
pub async fn predict(
    State(ctx): State<ApiContext>,
    Json(req): Json<SymptomRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    if req.symptoms.trim().is_empty() {
        return Err(ApiError::BadRequest("Symptoms text is required".into()));
    }

    let result = ctx.predictor.predict(&req.symptoms).await;
    Ok(Json(result))
}
