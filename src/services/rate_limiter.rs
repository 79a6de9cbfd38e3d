use governor::{DefaultDirectRateLimiter, Jitter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const MAX_JITTER_MILLIS: u64 = 100;

#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<DefaultDirectRateLimiter>,
    burst_limiter: Arc<DefaultDirectRateLimiter>,
}

impl ApiRateLimiter {
    /// Zero limits are raised to one request.
    pub fn new(per_minute: u32, burst_per_second: u32) -> Self {
        let per_minute = NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN);
        let burst_per_second = NonZeroU32::new(burst_per_second).unwrap_or(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))),
            burst_limiter: Arc::new(RateLimiter::direct(Quota::per_second(burst_per_second))),
        }
    }

    pub async fn acquire(&self) {
        self.burst_limiter.until_ready().await;
        self.limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(MAX_JITTER_MILLIS)))
            .await;
    }
}
