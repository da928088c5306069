//! Gatehouse Common Library
//!
//! Shared types and validators for the Gatehouse access-management
//! console. Validators run on the console for inline feedback and are
//! the same rules the service enforces.

pub mod protocol;
pub mod validators;

/// Score a password may reach on the 0..=4 strength scale
pub const MAX_PASSWORD_SCORE: u8 = 4;
