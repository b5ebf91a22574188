//! Business services containing domain logic and use cases.

pub mod verification_resend;

// Re-export commonly used types
pub use verification_resend::{
    Clock, CooldownStoreTrait, IdentityProviderTrait, ResendReceipt, ResendServiceConfig,
    SystemClock, VerificationResendService,
};
