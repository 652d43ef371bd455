use super::PredictionError;

/// How a failed generative call should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Quota or rate-limit exhaustion; retryable, and surfaced to callers
    /// as the "system busy" sentinel once retries run out.
    RateLimited,
    /// Expected to resolve on retry (connection loss, timeout, 5xx).
    Transient,
    /// Retrying will not help (bad request, malformed response).
    Fatal,
}

impl FailureKind {
    pub fn is_retryable(self) -> bool {
        matches!(self, FailureKind::RateLimited | FailureKind::Transient)
    }
}

/// Classify a failure from its status and textual representation.
///
/// The rendered message is checked before the structured status: backends
/// bury quota markers ("429", "RESOURCE_EXHAUSTED") inside error bodies
/// with unrelated status codes.
pub fn classify_failure(err: &PredictionError) -> FailureKind {
    let text = err.to_string();
    if text.contains("429") || text.contains("RESOURCE_EXHAUSTED") {
        return FailureKind::RateLimited;
    }

    match err {
        PredictionError::Connection(_) => FailureKind::Transient,
        PredictionError::HttpClient(msg) if msg.contains("timed out") => FailureKind::Transient,
        PredictionError::Backend { status, .. } if *status >= 500 => FailureKind::Transient,
        _ => FailureKind::Fatal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_is_rate_limited() {
        let err = PredictionError::Backend {
            status: 429,
            body: "quota exceeded".into(),
        };
        assert_eq!(classify_failure(&err), FailureKind::RateLimited);
    }

    #[test]
    fn resource_exhausted_marker_is_rate_limited() {
        let err = PredictionError::Backend {
            status: 400,
            body: r#"{"error": {"status": "RESOURCE_EXHAUSTED"}}"#.into(),
        };
        assert_eq!(classify_failure(&err), FailureKind::RateLimited);
    }

    #[test]
    fn quota_marker_buried_in_5xx_body_is_rate_limited() {
        let err = PredictionError::Backend {
            status: 503,
            body: "upstream replied 429".into(),
        };
        assert_eq!(classify_failure(&err), FailureKind::RateLimited);
    }

    #[test]
    fn connection_failure_is_transient() {
        let err = PredictionError::Connection("https://generativelanguage.googleapis.com".into());
        assert_eq!(classify_failure(&err), FailureKind::Transient);
    }

    #[test]
    fn timeout_is_transient() {
        let err = PredictionError::HttpClient("request timed out after 30s".into());
        assert_eq!(classify_failure(&err), FailureKind::Transient);
    }

    #[test]
    fn server_error_is_transient() {
        let err = PredictionError::Backend {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(classify_failure(&err), FailureKind::Transient);
    }

    #[test]
    fn client_error_is_fatal() {
        let err = PredictionError::Backend {
            status: 400,
            body: "invalid request".into(),
        };
        assert_eq!(classify_failure(&err), FailureKind::Fatal);
    }

    #[test]
    fn malformed_response_is_fatal() {
        let err = PredictionError::MalformedResponse("expected value at line 1".into());
        assert_eq!(classify_failure(&err), FailureKind::Fatal);
    }

    #[test]
    fn empty_completion_is_fatal() {
        assert_eq!(
            classify_failure(&PredictionError::EmptyCompletion),
            FailureKind::Fatal
        );
    }

    #[test]
    fn retryable_covers_rate_limited_and_transient() {
        assert!(FailureKind::RateLimited.is_retryable());
        assert!(FailureKind::Transient.is_retryable());
        assert!(!FailureKind::Fatal.is_retryable());
    }
}
