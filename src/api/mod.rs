//! HTTP surface for the prediction engine.
//!
//! The router is composable — `prediction_router()` returns a `Router`
//! that can be mounted on any axum server instance. Everything behind it
//! treats the predictor as a black box that always answers.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::prediction_router;
pub use types::ApiContext;
