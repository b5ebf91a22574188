//! Types for resend service results

use chrono::{DateTime, TimeZone, Utc};

/// Result of a successful resend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendReceipt {
    /// Provider identifier of the user the email went to
    pub user_id: String,
    /// When the resend was accepted, epoch millis
    pub sent_at_millis: i64,
    /// Whether the cooldown entry was written
    pub cooldown_recorded: bool,
}

impl ResendReceipt {
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.sent_at_millis).single()
    }
}
