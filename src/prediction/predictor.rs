use std::sync::Arc;

use super::classify::{classify_failure, FailureKind};
use super::gemini::{GeminiClient, GenerativeClient};
use super::parser::parse_prediction;
use super::prompt::build_prediction_prompt;
use super::retry::RetryPolicy;
use super::rules;
use super::types::{PredictionResult, Severity};
use super::PredictionError;
use crate::config::Config;

/// Which strategy answers predictions, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMode {
    RuleBased,
    Generative,
}

struct GenerativeBackend {
    client: Arc<dyn GenerativeClient>,
    model: String,
    retry: RetryPolicy,
}

/// Prediction orchestrator.
///
/// In generative mode every error is absorbed here: rate-limit exhaustion
/// becomes the "system busy" sentinel, everything else falls back to the
/// rule-based matcher. Callers always receive a populated result.
pub struct Predictor {
    backend: Option<GenerativeBackend>,
}

impl Predictor {
    /// Pick the mode from the runtime configuration. Generative mode
    /// requires a credential and a successfully-built HTTP client; both
    /// are checked exactly once, here.
    pub fn from_config(config: &Config) -> Self {
        let Some(api_key) = config.gemini_api_key.as_deref() else {
            tracing::info!("no GEMINI_API_KEY found, running in rule-based mode");
            return Self::rule_based();
        };

        match GeminiClient::default_remote(api_key) {
            Ok(client) => {
                tracing::info!(model = %config.model, "running in generative mode");
                Self::generative(Arc::new(client), &config.model)
            }
            Err(e) => {
                tracing::warn!(error = %e, "generative backend init failed, running in rule-based mode");
                Self::rule_based()
            }
        }
    }

    pub fn rule_based() -> Self {
        Self { backend: None }
    }

    pub fn generative(client: Arc<dyn GenerativeClient>, model: &str) -> Self {
        Self {
            backend: Some(GenerativeBackend {
                client,
                model: model.to_string(),
                retry: RetryPolicy::default(),
            }),
        }
    }

    /// Replace the retry policy (tests use millisecond-scale delays).
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        if let Some(backend) = &mut self.backend {
            backend.retry = retry;
        }
        self
    }

    pub fn mode(&self) -> PredictionMode {
        if self.backend.is_some() {
            PredictionMode::Generative
        } else {
            PredictionMode::RuleBased
        }
    }

    /// Produce a triage suggestion for a symptom description.
    ///
    /// Never fails: the rule-based matcher always answers, so the only
    /// caller-visible failures are upstream input validation and genuinely
    /// unexpected panics.
    pub async fn predict(&self, symptoms: &str) -> PredictionResult {
        let Some(backend) = &self.backend else {
            return rules::match_symptoms(symptoms);
        };

        match generate_prediction(backend, symptoms).await {
            Ok(result) => result,
            Err(err) => match classify_failure(&err) {
                FailureKind::RateLimited => {
                    tracing::warn!(error = %err, "rate limit hit, returning overload sentinel");
                    rate_limit_sentinel()
                }
                _ => {
                    tracing::warn!(error = %err, "generative prediction failed, using rule-based fallback");
                    rules::match_symptoms(symptoms)
                }
            },
        }
    }
}

async fn generate_prediction(
    backend: &GenerativeBackend,
    symptoms: &str,
) -> Result<PredictionResult, PredictionError> {
    let prompt = build_prediction_prompt(symptoms);
    let raw = backend
        .retry
        .run(|| backend.client.generate(&backend.model, &prompt))
        .await?;
    parse_prediction(&raw)
}

/// Fixed soft-failure payload for quota exhaustion. Returned as a normal
/// result so callers never see quota internals as an error.
pub fn rate_limit_sentinel() -> PredictionResult {
    PredictionResult {
        condition: "System Busy (Rate Limit)".into(),
        confidence: 0.0,
        severity: Severity::Low,
        specialist: "General Physician".into(),
        medicine: "None".into(),
        recommended_minerals: Vec::new(),
        mineral_benefits: "N/A".into(),
        advice: "The AI service is currently overwhelmed (Free Tier Limit). Please wait 30 seconds and try again."
            .into(),
    }
}
