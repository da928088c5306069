//! User editor handlers

mod user_editor;

pub use user_editor::{SaveError, SaveOutcome, SaveStep, fetch_user};
