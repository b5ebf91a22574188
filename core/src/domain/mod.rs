//! Domain entities for the resend flow.

pub mod entities;

pub use entities::*;
