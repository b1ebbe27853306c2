// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Fixed-window rate limiter for the contact endpoint.
//!
//! Counts requests per client key within discrete, non-overlapping windows
//! (default 5 per hour). A record whose window has lapsed is treated as
//! absent and replaced on the next request. Once a key is at the limit the
//! count is not incremented further, so the window does not slide forward
//! under a flood.
//!
//! The counting is approximate: a client can fit up to
//! `2 * max - 1` requests into a short burst straddling a window boundary.

use crate::config::RateLimitConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Result of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitResult {
    /// Request is allowed
    Allowed {
        /// Remaining requests in the current window
        remaining: u32,
    },
    /// Request is rate limited until the window lapses
    Limited,
}

impl RateLimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed { .. })
    }
}

/// Per-key window record.
#[derive(Debug)]
struct WindowRecord {
    count: u32,
    window_start: Instant,
}

/// Thread-safe fixed-window rate limiter.
///
/// The check-and-increment runs under a single write lock, so two
/// concurrent requests from the same key cannot both observe the last
/// remaining slot.
pub struct RateLimiter {
    config: RateLimitConfig,
    records: Arc<RwLock<HashMap<String, WindowRecord>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Check and record a request for `key`.
    pub async fn check(&self, key: &str) -> RateLimitResult {
        self.check_at(key, Instant::now()).await
    }

    /// Check and record a request for `key` as of `now`.
    ///
    /// Exposed so window expiry can be tested without sleeping.
    pub async fn check_at(&self, key: &str, now: Instant) -> RateLimitResult {
        let window = self.config.window_duration();
        let mut records = self.records.write().await;

        match records.get_mut(key) {
            Some(record) if now.duration_since(record.window_start) <= window => {
                if record.count >= self.config.max_requests {
                    debug!(key, count = record.count, "rate limit exceeded");
                    RateLimitResult::Limited
                } else {
                    record.count += 1;
                    RateLimitResult::Allowed {
                        remaining: self.config.max_requests - record.count,
                    }
                }
            }
            _ => {
                // First request from this key, or the window has lapsed.
                records.insert(
                    key.to_string(),
                    WindowRecord {
                        count: 1,
                        window_start: now,
                    },
                );
                RateLimitResult::Allowed {
                    remaining: self.config.max_requests - 1,
                }
            }
        }
    }

    /// Remove records whose window has lapsed (should be called
    /// periodically).
    ///
    /// Lapsed records are already replaced on access, so this only bounds
    /// the table's memory; it never changes an observable decision.
    pub async fn cleanup(&self) {
        self.cleanup_at(Instant::now()).await;
    }

    /// `cleanup` as of `now`; exposed for deterministic tests.
    pub async fn cleanup_at(&self, now: Instant) {
        let window = self.config.window_duration();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| now.duration_since(record.window_start) <= window);
        let evicted = before - records.len();
        if evicted > 0 {
            debug!(evicted, remaining = records.len(), "swept lapsed rate limit records");
        }
    }

    /// Number of tracked keys, for the sweep task's log line.
    pub async fn tracked_keys(&self) -> usize {
        self.records.read().await.len()
    }
}
