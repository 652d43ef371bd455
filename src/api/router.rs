//! Route table for the prediction service.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::prediction::Predictor;

/// Build the service router.
///
/// Origins that fail header-value parsing are skipped rather than
/// rejecting startup; an empty list simply disables cross-origin access.
pub fn prediction_router(predictor: Arc<Predictor>, allowed_origins: &[String]) -> Router {
    let ctx = ApiContext::new(predictor);

    Router::new()
        .route("/", get(endpoints::health::status))
        .route("/predict", post(endpoints::predict::predict))
        .with_state(ctx)
        .layer(cors_layer(allowed_origins))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentials + explicit method/header lists: tower-http refuses the
    // wildcard forms when cookies are allowed.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
