//! Identity resolved from the provider's user directory.

use serde::{Deserialize, Serialize};

/// A user as returned by the directory lookup.
///
/// Only `user_id` matters to the resend flow; it is the key for cooldown
/// entries. The remaining fields are carried for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
}

impl UserRecord {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            email_verified: None,
        }
    }
}
