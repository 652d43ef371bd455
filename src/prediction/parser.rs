use super::types::PredictionResult;
use super::PredictionError;

/// Decode a raw model completion into a `PredictionResult`.
///
/// Models wrap JSON in markdown fences despite being told not to, so all
/// ```` ```json ```` and ```` ``` ```` markers are removed before decoding.
/// Decoding is permissive: a JSON object missing fields is accepted with
/// defaults. `confidence` is clamped into [0.0, 1.0] afterwards.
pub fn parse_prediction(raw: &str) -> Result<PredictionResult, PredictionError> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let mut result: PredictionResult = serde_json::from_str(cleaned)
        .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;

    result.confidence = result.confidence.clamp(0.0, 1.0);
    Ok(result)
}
