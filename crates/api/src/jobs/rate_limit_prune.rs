//! Drops rate limiter entries for users that have gone quiet.

use std::sync::Arc;
use std::time::Duration;

use super::scheduler::Job;
use crate::middleware::RateLimiterState;

pub struct RateLimitPruneJob {
    limiter: Arc<RateLimiterState>,
}

impl RateLimitPruneJob {
    pub fn new(limiter: Arc<RateLimiterState>) -> Self {
        Self { limiter }
    }
}

#[async_trait::async_trait]
impl Job for RateLimitPruneJob {
    fn name(&self) -> &'static str {
        "rate_limit_prune"
    }

    fn interval(&self) -> Duration {
        Duration::from_secs(300)
    }

    async fn execute(&self) -> Result<(), String> {
        self.limiter.prune();
        Ok(())
    }
}
