//! Input validation functions
//!
//! Reusable validators for operator input. The console uses them for
//! inline feedback as the operator types; the service applies the same
//! rules on submission.

mod username;

pub use username::{MIN_USERNAME_LENGTH, UsernameError, validate_username};
