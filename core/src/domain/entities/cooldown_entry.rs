//! Persisted per-user cooldown bookkeeping.

use serde::{Deserialize, Serialize};

/// Last successful resend for a user, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownEntry {
    pub last_sent_at_millis: i64,
}

impl CooldownEntry {
    pub fn new(last_sent_at_millis: i64) -> Self {
        Self { last_sent_at_millis }
    }

    /// Milliseconds elapsed between the last send and `now_millis`
    pub fn elapsed_millis(&self, now_millis: i64) -> i64 {
        now_millis.saturating_sub(self.last_sent_at_millis)
    }

    /// Whether a resend at `now_millis` still falls inside `window_ms`.
    ///
    /// The window is half-open: exactly `window_ms` elapsed counts as expired.
    pub fn is_active(&self, now_millis: i64, window_ms: i64) -> bool {
        self.elapsed_millis(now_millis) < window_ms
    }

    /// Milliseconds until the window closes, never more than the window itself
    pub fn remaining_millis(&self, now_millis: i64, window_ms: i64) -> i64 {
        (window_ms - self.elapsed_millis(now_millis)).clamp(0, window_ms)
    }
}
