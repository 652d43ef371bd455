//! Root status endpoint.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// `GET /` — liveness check for load balancers and the frontend.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        message: "Sympta prediction API is running",
        version: config::APP_VERSION,
    })
}
