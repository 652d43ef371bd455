use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::PredictionError;

/// Generative text backend abstraction (allows mocking).
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send one prompt to the named model and return its raw completion.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, PredictionError>;
}

/// HTTP client for the Google Generative Language API.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Create a client pointing at an explicit API host.
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, PredictionError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PredictionError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        })
    }

    /// Client for the public Google endpoint with a 30-second timeout.
    pub fn default_remote(api_key: &str) -> Result<Self, PredictionError> {
        Self::new("https://generativelanguage.googleapis.com", api_key, 30)
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response body from `models/{model}:generateContent`
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, PredictionError> {
        // The key travels as a query parameter; keep it out of every error.
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PredictionError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    PredictionError::HttpClient(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    PredictionError::HttpClient(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PredictionError::ResponseDecoding(e.without_url().to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(PredictionError::EmptyCompletion);
        }
        Ok(text)
    }
}

/// Mock backend for tests — plays back a scripted failure sequence, then
/// returns a configured completion forever.
pub struct MockGenerativeClient {
    failures: Mutex<VecDeque<PredictionError>>,
    completion: String,
    calls: AtomicU32,
}

impl MockGenerativeClient {
    pub fn new(completion: &str) -> Self {
        Self {
            failures: Mutex::new(VecDeque::new()),
            completion: completion.to_string(),
            calls: AtomicU32::new(0),
        }
    }

    /// Fail with each error in order before succeeding.
    pub fn with_failures(self, errors: Vec<PredictionError>) -> Self {
        Self {
            failures: Mutex::new(errors.into()),
            ..self
        }
    }

    /// Number of `generate` calls observed so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self
            .failures
            .lock()
            .map_err(|_| PredictionError::HttpClient("mock lock poisoned".into()))?
            .pop_front();
        match scripted {
            Some(err) => Err(err),
            None => Ok(self.completion.clone()),
        }
    }
}
