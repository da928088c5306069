//! User editor load and save handlers
//!
//! Load happens once when the editor opens. Save is a strictly
//! sequential three-call chain: the user write returns the identifiers
//! the two follow-up writes need, so the calls cannot overlap and none
//! is retried.

use std::fmt;

use gatehouse_common::protocol::{UserPayload, UserRecord};

use crate::api::{ApiError, UserAdminApi};
use crate::types::UserEditor;

/// Which remote call of the save sequence failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStep {
    /// Create or update of the user record itself
    User,
    /// Server-permission update on the user's home group
    GroupServers,
    /// Group-membership update for the user
    GroupMemberships,
}

impl SaveStep {
    fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user update",
            Self::GroupServers => "group server permissions",
            Self::GroupMemberships => "group memberships",
        }
    }
}

impl fmt::Display for SaveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A save sequence failure, naming the call that failed
///
/// The draft is left untouched on failure so the operator can retry.
#[derive(Debug)]
pub struct SaveError {
    pub step: SaveStep,
    pub source: ApiError,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.step, self.source)
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Result of a save attempt
#[derive(Debug)]
pub enum SaveOutcome {
    /// The username failed validation; no remote call was made
    Skipped,
    /// All three calls succeeded; the shell should fire its completion
    /// callback on this outcome and only this outcome
    Completed,
    /// A call failed; later calls did not run and the draft is intact
    Failed(SaveError),
}

/// Fetch the record for an editor opened on an existing user
///
/// `None` id means create mode, nothing to fetch. A not-found id also
/// resolves to `Ok(None)`: the editor simply starts blank, with no
/// error surfaced.
///
/// # Errors
///
/// Any failure other than not-found, to be stored via
/// [`UserEditor::load_failed`] and re-raised by the shell.
pub async fn fetch_user<A: UserAdminApi + ?Sized>(
    api: &A,
    item_id: Option<i64>,
) -> Result<Option<UserRecord>, ApiError> {
    let Some(id) = item_id else {
        return Ok(None);
    };
    match api.get_user(id).await {
        Ok(record) => Ok(Some(record)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

impl UserEditor {
    /// Load the draft from the service, once, at activation
    ///
    /// Applies the fetched record (edit mode) or leaves the blank
    /// create-mode draft in place. Failures land in `load_error`.
    pub async fn load<A: UserAdminApi + ?Sized>(&mut self, api: &A) {
        match fetch_user(api, self.item_id).await {
            Ok(Some(record)) => self.apply_loaded(record),
            Ok(None) => {}
            Err(e) => self.load_failed(e),
        }
    }

    /// Run the save sequence
    ///
    /// 1. Create or update the user, capturing the returned user id
    ///    and home group id.
    /// 2. Replace the home group's server permissions with the current
    ///    selection.
    /// 3. Replace the user's group memberships with the current
    ///    selection.
    ///
    /// Each step depends on the previous one's result; a failure halts
    /// the chain immediately. The draft itself is never mutated here,
    /// so a failed save can be retried as-is.
    pub async fn save<A: UserAdminApi + ?Sized>(&self, api: &A) -> SaveOutcome {
        if self.username_error.is_some() {
            return SaveOutcome::Skipped;
        }

        let payload = UserPayload {
            name: self.name.clone(),
            password: self.password.clone(),
            is_admin: self.is_admin,
        };

        let result = match (self.edit_mode, self.item_id) {
            (true, Some(id)) => api.edit_user(id, &payload).await,
            _ => api.create_user(&payload).await,
        };
        let saved = match result {
            Ok(saved) => saved,
            Err(source) => {
                return SaveOutcome::Failed(SaveError {
                    step: SaveStep::User,
                    source,
                });
            }
        };

        if let Err(source) = api.edit_group_servers(saved.group_id, &self.servers).await {
            return SaveOutcome::Failed(SaveError {
                step: SaveStep::GroupServers,
                source,
            });
        }

        if let Err(source) = api.edit_group_memberships(saved.id, &self.groups).await {
            return SaveOutcome::Failed(SaveError {
                step: SaveStep::GroupMemberships,
                source,
            });
        }

        SaveOutcome::Completed
    }
}
