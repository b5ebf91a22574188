//! Domain entities.

pub mod access_token;
pub mod cooldown_entry;
pub mod resend_request;
pub mod user_record;

pub use access_token::AccessToken;
pub use cooldown_entry::CooldownEntry;
pub use resend_request::ResendRequest;
pub use user_record::UserRecord;
