use std::sync::Arc;

use serde::Deserialize;

use crate::prediction::Predictor;

/// Shared state for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub predictor: Arc<Predictor>,
}

impl ApiContext {
    pub fn new(predictor: Arc<Predictor>) -> Self {
        Self { predictor }
    }
}

#[derive(Deserialize)]
pub struct SymptomRequest {
    pub symptoms: String,
}
