use crate::domain::ports::Scheduler;
use std::time::Duration;

/// Tokio-timer scheduler. Under `tokio::test(start_paused = true)` the same
/// sleeps run against the paused clock, which is what makes the banner cycle
/// deterministic in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    async fn after(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
