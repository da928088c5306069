//! Console state types

mod form;

pub use form::{MSG_USERNAME_INVALID, MSG_USERNAME_TOO_SHORT, UserEditor, username_message};
