//! Remote service access
//!
//! The console talks to the Gatehouse service through the narrow
//! [`UserAdminApi`] seam. Production code uses the JSON-over-HTTP
//! [`HttpApi`]; tests drive the editor with in-memory implementations.

mod http;

pub use http::HttpApi;

use std::fmt;

use async_trait::async_trait;
use gatehouse_common::protocol::{SavedUser, ServerAccess, UserPayload, UserRecord};

/// Error returned by service calls
#[derive(Debug)]
pub enum ApiError {
    /// The requested record does not exist (HTTP 404)
    ///
    /// Expected during load: opening the editor without an existing
    /// record resolves to a blank create-mode form.
    NotFound,
    /// The service rejected the request with a non-success status
    Status {
        code: u16,
        message: String,
    },
    /// The request never produced a response (connection, TLS, decode)
    Transport(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "record not found"),
            Self::Status { code, message } => {
                if message.is_empty() {
                    write!(f, "service returned status {code}")
                } else {
                    write!(f, "service returned status {code}: {message}")
                }
            }
            Self::Transport(e) => write!(f, "request failed: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// User administration operations exposed by the Gatehouse service
///
/// One method per remote operation the user editor performs. The save
/// sequence calls these strictly in order; implementations must not
/// assume any call pattern beyond that.
#[async_trait]
pub trait UserAdminApi: Send + Sync {
    /// Fetch an existing user record
    async fn get_user(&self, id: i64) -> Result<UserRecord, ApiError>;

    /// Create a new user, returning its id and home group id
    async fn create_user(&self, user: &UserPayload) -> Result<SavedUser, ApiError>;

    /// Update an existing user, returning its id and home group id
    async fn edit_user(&self, id: i64, user: &UserPayload) -> Result<SavedUser, ApiError>;

    /// Replace a group's server-permission list wholesale
    async fn edit_group_servers(
        &self,
        group_id: i64,
        servers: &[ServerAccess],
    ) -> Result<(), ApiError>;

    /// Replace a user's group memberships wholesale
    async fn edit_group_memberships(&self, user_id: i64, groups: &[i64]) -> Result<(), ApiError>;
}
