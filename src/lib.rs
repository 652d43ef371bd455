//! Sympta — symptom triage prediction service.
//!
//! Free-text symptoms in, structured triage suggestions out. A generative
//! backend produces the primary answer; a deterministic keyword matcher
//! keeps the service answering when that backend is absent, failing, or
//! rate limited.

pub mod api;
pub mod config;
pub mod prediction;
