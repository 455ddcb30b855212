//! Per-token quota tracking for the public API.
//!
//! This module provides the `RateLimiter` used by the authorization gate. Each identity
//! (an API token) owns a window counter: requests consume points from the window budget
//! and once the budget is exceeded the identity is blocked for a fixed period. Quota
//! state is created lazily on the first consumption, resets itself when its window or
//! block elapses, and is never explicitly destroyed.
//!
//! State lives in memory and is shared by every clone of the limiter. Each consumption
//! is a single critical section, so concurrent requests for one identity can never push
//! the consumed total past the budget unnoticed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Points available to each identity per window.
pub const API_POINTS: u32 = 75;
/// Length of the rolling window.
pub const API_WINDOW: Duration = Duration::from_secs(1);
/// How long an identity is blocked after exceeding its budget.
pub const API_BLOCK: Duration = Duration::from_secs(10);
/// Cost of one request made with a verified bot's token.
pub const VERIFIED_COST: u32 = 5;
/// Cost of one request made with an unverified bot's token.
pub const UNVERIFIED_COST: u32 = 15;

/// Number of tracked identities above which expired entries are swept on insert.
const SWEEP_THRESHOLD: usize = 10_000;

/// Budget, window and block length applied to every identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub points: u32,
    pub window: Duration,
    pub block: Duration,
}

impl RateLimitPolicy {
    /// The public API policy: 75 points per second, 10 second block.
    pub const fn api() -> Self {
        Self {
            points: API_POINTS,
            window: API_WINDOW,
            block: API_BLOCK,
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::api()
    }
}

/// Quota state of a single identity.
struct QuotaState {
    /// Points consumed since the window opened, rejected attempts included.
    consumed: u32,
    /// End of the current window, or of the block once the budget was exceeded.
    expires_at: Instant,
}

/// Remaining budget after a successful consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaSnapshot {
    pub limit: u32,
    pub remaining: u32,
    /// Time until the window resets.
    pub reset_after: Duration,
}

/// Rejection returned while an identity is over budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaExceeded {
    /// Time until the next consumption can succeed.
    pub retry_after: Duration,
}

impl QuotaExceeded {
    /// Retry delay in whole seconds, rounded up and never below 1.
    pub fn retry_after_secs(&self) -> u64 {
        let secs = self.retry_after.as_millis().div_ceil(1000).max(1);
        u64::try_from(secs).unwrap_or(u64::MAX)
    }
}

/// Shared, cloneable per-identity rate limiter.
#[derive(Clone)]
pub struct RateLimiter {
    policy: RateLimitPolicy,
    quotas: Arc<Mutex<HashMap<String, QuotaState>>>,
}

impl RateLimiter {
    /// Creates a limiter with no tracked identities.
    ///
    /// # Arguments
    /// - `policy` - Budget, window and block length applied to every identity
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            quotas: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Consumes `cost` points from the identity's budget.
    ///
    /// Starts a new window if the identity has none or its previous window (or block)
    /// elapsed. When this consumption is the one that first crosses the budget, the
    /// identity's state is extended to expire after the block duration. Rejected
    /// consumptions still count, but never extend an existing block.
    ///
    /// # Arguments
    /// - `identity` - Key the quota is tracked under (the caller's token)
    /// - `cost` - Points this request costs
    ///
    /// # Returns
    /// - `Ok(QuotaSnapshot)` - Budget remained; points were consumed
    /// - `Err(QuotaExceeded)` - Budget exhausted; carries the time until the next slot
    pub async fn consume(&self, identity: &str, cost: u32) -> Result<QuotaSnapshot, QuotaExceeded> {
        let now = Instant::now();
        let mut quotas = self.quotas.lock().await;

        if quotas.len() >= SWEEP_THRESHOLD && !quotas.contains_key(identity) {
            quotas.retain(|_, state| state.expires_at > now);
        }

        let state = quotas
            .entry(identity.to_owned())
            .or_insert_with(|| QuotaState {
                consumed: 0,
                expires_at: now + self.policy.window,
            });

        if state.expires_at <= now {
            state.consumed = 0;
            state.expires_at = now + self.policy.window;
        }

        state.consumed = state.consumed.saturating_add(cost);

        if state.consumed > self.policy.points {
            if state.consumed <= self.policy.points.saturating_add(cost) {
                state.expires_at = now + self.policy.block;
            }

            return Err(QuotaExceeded {
                retry_after: state.expires_at.saturating_duration_since(now),
            });
        }

        Ok(QuotaSnapshot {
            limit: self.policy.points,
            remaining: self.policy.points - state.consumed,
            reset_after: state.expires_at.saturating_duration_since(now),
        })
    }

    /// Number of identities currently tracked, expired ones included.
    #[cfg(test)]
    pub async fn tracked_identities(&self) -> usize {
        self.quotas.lock().await.len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitPolicy::api())
    }
}
