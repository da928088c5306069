//! Gatehouse Console core
//!
//! Embeddable logic for the Gatehouse admin console's user editor:
//! form state, inline username validation, password generation and
//! strength scoring, and the save orchestration against the service
//! API. Rendering is the embedding shell's concern; everything here is
//! driven through plain method calls and returned values.

pub mod api;
pub mod handlers;
pub mod password;
pub mod types;

pub use api::{ApiError, HttpApi, UserAdminApi};
pub use handlers::{SaveError, SaveOutcome, SaveStep};
pub use types::UserEditor;
