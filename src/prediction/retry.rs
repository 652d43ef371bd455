use std::future::Future;
use std::time::Duration;

use super::classify::classify_failure;
use super::PredictionError;

/// Bounded exponential backoff for generative calls.
///
/// Delay before the next attempt after `failures` consecutive failures is
/// `clamp(multiplier * 2^failures, min_delay, max_delay)`; with the default
/// parameters that is 4s, 8s, 16s, 32s, then 60s-capped.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub multiplier: Duration,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            multiplier: Duration::from_secs(2),
            min_delay: Duration::from_secs(4),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Delay after `failures` consecutive failures (1-based). Pure, so the
    /// schedule is testable without sleeping.
    pub fn backoff_delay(&self, failures: u32) -> Duration {
        let factor = 2u32.saturating_pow(failures.min(31));
        self.multiplier
            .saturating_mul(factor)
            .clamp(self.min_delay, self.max_delay)
    }

    /// Drive `op` until it succeeds, fails fatally, or the attempt budget
    /// runs out. Only failures classified retryable are retried; the last
    /// failure is returned, not swallowed.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, PredictionError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, PredictionError>>,
    {
        let mut failures = 0u32;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    failures += 1;
                    if failures >= self.max_attempts || !classify_failure(&err).is_retryable() {
                        return Err(err);
                    }
                    let delay = self.backoff_delay(failures);
                    tracing::debug!(
                        attempt = failures + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying generative call"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Millisecond-scale policy so retry tests finish quickly.
    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 5,
            multiplier: Duration::from_millis(1),
            min_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    fn transient() -> PredictionError {
        PredictionError::Backend {
            status: 503,
            body: "overloaded".into(),
        }
    }

    #[test]
    fn default_backoff_schedule_matches_tenacity_parameters() {
        let policy = RetryPolicy::default();
        let delays: Vec<u64> = (1..=5).map(|n| policy.backoff_delay(n).as_secs()).collect();
        assert_eq!(delays, vec![4, 8, 16, 32, 60]);
    }

    #[test]
    fn backoff_never_exceeds_ceiling() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_delay(30).as_secs(), 60);
        assert_eq!(policy.backoff_delay(u32::MAX).as_secs(), 60);
    }

    #[tokio::test]
    async fn succeeds_after_four_transient_failures() {
        let attempts = Cell::new(0u32);
        let result = fast_policy()
            .run(|| {
                let n = attempts.get() + 1;
                attempts.set(n);
                async move {
                    if n < 5 {
                        Err(transient())
                    } else {
                        Ok("recovered")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "recovered");
        assert_eq!(attempts.get(), 5);
    }

    #[tokio::test]
    async fn exhausted_attempts_return_last_failure() {
        let attempts = Cell::new(0u32);
        let result: Result<(), _> = fast_policy()
            .run(|| {
                attempts.set(attempts.get() + 1);
                async { Err(transient()) }
            })
            .await;

        assert_eq!(attempts.get(), 5);
        assert!(matches!(
            result.unwrap_err(),
            PredictionError::Backend { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn fatal_failure_is_not_retried() {
        let attempts = Cell::new(0u32);
        let result: Result<(), _> = fast_policy()
            .run(|| {
                attempts.set(attempts.get() + 1);
                async { Err(PredictionError::MalformedResponse("not json".into())) }
            })
            .await;

        assert_eq!(attempts.get(), 1);
        assert!(matches!(
            result.unwrap_err(),
            PredictionError::MalformedResponse(_)
        ));
    }

    #[tokio::test]
    async fn rate_limit_is_retried_until_budget_runs_out() {
        let attempts = Cell::new(0u32);
        let result: Result<(), _> = fast_policy()
            .run(|| {
                attempts.set(attempts.get() + 1);
                async {
                    Err(PredictionError::Backend {
                        status: 429,
                        body: "RESOURCE_EXHAUSTED".into(),
                    })
                }
            })
            .await;

        assert_eq!(attempts.get(), 5);
        assert!(matches!(
            result.unwrap_err(),
            PredictionError::Backend { status: 429, .. }
        ));
    }
}
