use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Enforces a minimum interval between successive requests
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval: Duration::from_millis(min_interval_ms),
            last_request: None,
        }
    }

    /// Wait until the minimum interval since the previous request has passed.
    /// The first request goes through immediately.
    pub async fn wait(&mut self) {
        if let Some(remaining) = self.remaining_delay() {
            sleep(remaining).await;
        }
        self.last_request = Some(Instant::now());
    }

    fn remaining_delay(&self) -> Option<Duration> {
        let last = self.last_request?;
        self.min_interval.checked_sub(last.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_not_delayed() {
        let mut limiter = RateLimiter::new(1000);

        let before = Instant::now();
        limiter.wait().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_request_waits_out_the_interval() {
        let mut limiter = RateLimiter::new(1000);
        limiter.wait().await;

        let before = Instant::now();
        limiter.wait().await;
        assert!(before.elapsed() >= Duration::from_millis(1000));
    }
}
