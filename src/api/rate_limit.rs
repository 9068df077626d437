// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rate limiting at the request-routing boundary
//!
//! Every chat request passes through an in-process limiter before it
//! reaches the handler. Allowed and denied responses both carry the
//! `X-RateLimit-*` headers.

use axum::extract::{Request, State};
use axum::http::HeaderName;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::clock::{Clock, DefaultClock};
use governor::middleware::StateInformationMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovRateLimiter};
use std::num::NonZeroU32;
use tracing::warn;

use super::errors::ApiError;
use super::http_server::AppState;

const LIMIT_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const REMAINING_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
const RESET_HEADER: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Limiter state reported on allowed requests
#[derive(Debug, Clone, Copy)]
pub struct RateLimitStatus {
    pub limit: u32,
    pub remaining: u32,
}

/// Denial details reported on limited requests
#[derive(Debug, Clone, Copy)]
pub struct RateLimitDenied {
    pub limit: u32,
    pub retry_after_secs: u64,
}

/// Rate limiter for API requests
pub struct ApiRateLimiter {
    limiter: GovRateLimiter<NotKeyed, InMemoryState, DefaultClock, StateInformationMiddleware>,
    clock: DefaultClock,
    limit_per_minute: u32,
}

impl ApiRateLimiter {
    /// Create a new rate limiter
    ///
    /// # Arguments
    /// * `limit_per_minute` - Maximum requests allowed per minute
    pub fn new(limit_per_minute: u32) -> Self {
        let rpm = NonZeroU32::new(limit_per_minute).unwrap_or(NonZeroU32::new(10).unwrap());
        let quota = Quota::per_minute(rpm);
        let clock = DefaultClock::default();
        let limiter = GovRateLimiter::direct_with_clock(quota, &clock)
            .with_middleware::<StateInformationMiddleware>();

        Self {
            limiter,
            clock,
            limit_per_minute: rpm.get(),
        }
    }

    /// Check if a request is allowed
    pub fn check(&self) -> Result<RateLimitStatus, RateLimitDenied> {
        match self.limiter.check() {
            Ok(snapshot) => Ok(RateLimitStatus {
                limit: self.limit_per_minute,
                remaining: snapshot.remaining_burst_capacity(),
            }),
            Err(not_until) => Err(RateLimitDenied {
                limit: self.limit_per_minute,
                retry_after_secs: not_until.wait_time_from(self.clock.now()).as_secs(),
            }),
        }
    }

    /// Get the configured requests per minute
    pub fn limit_per_minute(&self) -> u32 {
        self.limit_per_minute
    }
}

/// Axum middleware applying the limiter to the routes it wraps
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match state.rate_limiter.check() {
        Ok(status) => {
            let mut response = next.run(request).await;
            let headers = response.headers_mut();
            headers.insert(LIMIT_HEADER, status.limit.into());
            headers.insert(REMAINING_HEADER, status.remaining.into());
            response
        }
        Err(denied) => {
            warn!(
                "Rate limit exceeded, retry after {}s",
                denied.retry_after_secs
            );
            let mut response = ApiError::RateLimitExceeded.into_response();
            let headers = response.headers_mut();
            headers.insert(LIMIT_HEADER, denied.limit.into());
            headers.insert(REMAINING_HEADER, 0u32.into());
            headers.insert(RESET_HEADER, denied.retry_after_secs.into());
            response
        }
    }
}
