pub mod classify;
pub mod gemini;
pub mod parser;
pub mod predictor;
pub mod prompt;
pub mod retry;
pub mod rules;
pub mod types;

pub use classify::*;
pub use gemini::*;
pub use parser::*;
pub use predictor::*;
pub use prompt::*;
pub use retry::*;
pub use rules::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("cannot reach generative backend at {0}")]
    Connection(String),

    #[error("generative backend returned error (status {status}): {body}")]
    Backend { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("empty completion from generative backend")]
    EmptyCompletion,

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("response decoding error: {0}")]
    ResponseDecoding(String),
}
