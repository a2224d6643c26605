//! Per-user rate limiting.
//!
//! Authenticated requests are limited per user id with a GCRA quota. Must
//! run after [`require_user_auth`](super::user_auth::require_user_auth).

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    clock::{Clock, DefaultClock},
    state::keyed::DefaultKeyedStateStore,
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::user_auth::UserAuth;

type UserRateLimiter = RateLimiter<Uuid, DefaultKeyedStateStore<Uuid>, DefaultClock>;

pub struct RateLimiterState {
    limiter: UserRateLimiter,
    rate_limit_per_minute: NonZeroU32,
}

impl RateLimiterState {
    pub fn new(rate_limit_per_minute: NonZeroU32) -> Self {
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(rate_limit_per_minute)),
            rate_limit_per_minute,
        }
    }

    /// Returns `Err(retry_after_secs)` when the user is over quota.
    pub fn check(&self, user_id: Uuid) -> Result<(), u64> {
        self.limiter.check_key(&user_id).map_err(|not_until| {
            let wait = not_until.wait_time_from(self.limiter.clock().now());
            wait.as_secs().max(1)
        })
    }

    /// Drops state for users whose quota has fully replenished.
    pub fn prune(&self) {
        self.limiter.retain_recent();
    }

    pub fn limit_per_minute(&self) -> u32 {
        self.rate_limit_per_minute.get()
    }
}

impl std::fmt::Debug for RateLimiterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiterState")
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .field("tracked_users", &self.limiter.len())
            .finish()
    }
}

pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (Some(limiter), Some(auth)) = (&state.rate_limiter, req.extensions().get::<UserAuth>())
    else {
        return next.run(req).await;
    };

    if let Err(retry_after) = limiter.check(auth.user_id) {
        tracing::warn!(
            user_id = %auth.user_id,
            limit = limiter.limit_per_minute(),
            retry_after,
            "Rate limit exceeded"
        );
        return rate_limited_response(retry_after);
    }

    next.run(req).await
}

fn rate_limited_response(retry_after: u64) -> Response {
    let mut response = ApiError::RateLimited.into_response();
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
    response
}
