//! User editor form state
//!
//! The draft for one user being created or edited, plus the pure field
//! handlers the shell wires to its inputs. Everything here is
//! synchronous and side-effect free; the remote calls live in
//! `handlers::user_editor`.

use gatehouse_common::protocol::{ServerAccess, UserRecord};
use gatehouse_common::validators::{self, UsernameError};

use crate::api::ApiError;
use crate::password;

/// Inline error for names of five characters or fewer
///
/// Copy matches the service's message catalog, spelling included.
pub const MSG_USERNAME_TOO_SHORT: &str = "Username should be more than 6 charactor";

/// Inline error for names with characters outside letters and `_`
pub const MSG_USERNAME_INVALID: &str = "Please use only letters and _";

/// Map a validation failure to its operator-facing message
pub fn username_message(error: UsernameError) -> &'static str {
    match error {
        UsernameError::TooShort => MSG_USERNAME_TOO_SHORT,
        UsernameError::InvalidCharacters => MSG_USERNAME_INVALID,
    }
}

/// State for the user create/edit form
///
/// Created when the form opens, mutated by operator input and the two
/// child pickers, dropped when the form closes. Nothing here survives
/// a successful save; the owning view refreshes its own list.
#[derive(Debug, Default)]
pub struct UserEditor {
    /// Id of the user being edited (None = creating a new user)
    pub item_id: Option<i64>,
    /// Username field
    pub name: String,
    /// Inline username error (None = valid, save allowed)
    pub username_error: Option<String>,
    /// Password field (plaintext until submission)
    pub password: String,
    /// Last known strength score; None until a password has been set.
    /// `Some(0)` is a real score and must not be treated as absent.
    pub password_strength: Option<u8>,
    /// Administrator rights toggle
    pub is_admin: bool,
    /// True iff the draft was loaded from an existing record
    pub edit_mode: bool,
    /// Home group of the loaded user, consumed by the server-permission
    /// picker
    pub group_id: Option<i64>,
    /// Group memberships, replaced wholesale by the groups picker
    pub groups: Vec<i64>,
    /// Server permissions, replaced wholesale by the servers picker
    pub servers: Vec<ServerAccess>,
    /// Fatal load failure, re-raised by the shell's error boundary
    pub load_error: Option<ApiError>,
    closed: bool,
}

impl UserEditor {
    /// Open the editor, for an existing user when `item_id` is Some
    pub fn new(item_id: Option<i64>) -> Self {
        Self {
            item_id,
            ..Self::default()
        }
    }

    /// Handle a username keystroke: store the value and revalidate
    pub fn name_changed(&mut self, value: String) {
        self.username_error = validators::validate_username(&value)
            .err()
            .map(|e| username_message(e).to_string());
        self.name = value;
    }

    /// Handle a password edit: store the value and rescore it
    ///
    /// No generation side effect; this is the path for typed input.
    pub fn password_changed(&mut self, value: String) {
        self.password_strength = Some(password::score(&value));
        self.password = value;
    }

    /// Handle the generate button: new random password, scored
    pub fn generate_password(&mut self) {
        let pass = password::generate();
        self.password_strength = Some(password::score(&pass));
        self.password = pass;
    }

    /// Handle the admin rights toggle
    pub fn set_admin(&mut self, is_admin: bool) {
        self.is_admin = is_admin;
    }

    /// Replace the group selection with the picker's latest snapshot
    ///
    /// Last write wins; the picker owns the selection.
    pub fn update_groups(&mut self, groups: Vec<i64>) {
        self.groups = groups;
    }

    /// Replace the server-permission selection with the picker's
    /// latest snapshot
    pub fn update_servers(&mut self, servers: Vec<ServerAccess>) {
        self.servers = servers;
    }

    /// Merge a fetched record into the draft and switch to edit mode
    ///
    /// Field-by-field mapping: fields added to `UserRecord` later do
    /// not reach the form unless mapped here. Ignored once the editor
    /// has been closed, so a late response cannot mutate a dead form.
    pub fn apply_loaded(&mut self, record: UserRecord) {
        if self.closed {
            return;
        }
        self.name = record.name;
        self.is_admin = record.is_admin;
        self.group_id = Some(record.group_id);
        self.edit_mode = true;
    }

    /// Record a fatal load failure (anything other than not-found)
    ///
    /// Ignored once the editor has been closed.
    pub fn load_failed(&mut self, error: ApiError) {
        if self.closed {
            return;
        }
        self.load_error = Some(error);
    }

    /// Tear the editor down; late remote results are ignored afterwards
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether the editor has been torn down
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: 7,
            name: "operator_one".to_string(),
            is_admin: true,
            group_id: 3,
        }
    }

    #[test]
    fn test_name_too_short_message() {
        let mut editor = UserEditor::new(None);
        editor.name_changed("ab".to_string());
        assert_eq!(editor.username_error.as_deref(), Some(MSG_USERNAME_TOO_SHORT));
    }

    #[test]
    fn test_name_six_letters_accepted() {
        // Six characters satisfies the "> 5" rule despite the message
        // wording for shorter names.
        let mut editor = UserEditor::new(None);
        editor.name_changed("abcdef".to_string());
        assert_eq!(editor.username_error, None);
    }

    #[test]
    fn test_name_invalid_characters_message() {
        let mut editor = UserEditor::new(None);
        editor.name_changed("abcdef1".to_string());
        assert_eq!(editor.username_error.as_deref(), Some(MSG_USERNAME_INVALID));
    }

    #[test]
    fn test_name_error_clears_when_fixed() {
        let mut editor = UserEditor::new(None);
        editor.name_changed("ab".to_string());
        editor.name_changed("operator_one".to_string());
        assert_eq!(editor.username_error, None);
    }

    #[test]
    fn test_strength_none_until_password_set() {
        let editor = UserEditor::new(None);
        assert_eq!(editor.password_strength, None);
    }

    #[test]
    fn test_typed_password_is_scored() {
        let mut editor = UserEditor::new(None);
        editor.password_changed("aaa".to_string());
        assert!(editor.password_strength.is_some());
    }

    #[test]
    fn test_score_zero_is_known_not_absent() {
        let mut editor = UserEditor::new(None);
        editor.password_changed("a".to_string());
        assert_eq!(editor.password_strength, Some(0));
    }

    #[test]
    fn test_generated_password_shape() {
        let mut editor = UserEditor::new(None);
        editor.generate_password();
        assert_eq!(editor.password.chars().count(), 16);
        assert!(editor.password_strength.is_some());
    }

    #[test]
    fn test_edit_after_generate_rescores() {
        let mut editor = UserEditor::new(None);
        editor.generate_password();
        editor.password_changed("aaa".to_string());
        assert_eq!(editor.password, "aaa");
        assert_eq!(editor.password_strength, Some(password::score("aaa")));
    }

    #[test]
    fn test_picker_updates_replace_wholesale() {
        let mut editor = UserEditor::new(None);
        editor.update_groups(vec![1, 2]);
        editor.update_groups(vec![3]);
        assert_eq!(editor.groups, vec![3]);

        editor.update_servers(vec![ServerAccess {
            server_id: 5,
            claims: vec!["read".to_string()],
        }]);
        editor.update_servers(Vec::new());
        assert!(editor.servers.is_empty());
    }

    #[test]
    fn test_apply_loaded_maps_fields() {
        let mut editor = UserEditor::new(Some(7));
        editor.apply_loaded(record());
        assert_eq!(editor.name, "operator_one");
        assert!(editor.is_admin);
        assert_eq!(editor.group_id, Some(3));
        assert!(editor.edit_mode);
        assert!(editor.load_error.is_none());
    }

    #[test]
    fn test_apply_loaded_ignored_after_close() {
        let mut editor = UserEditor::new(Some(7));
        editor.close();
        editor.apply_loaded(record());
        assert!(!editor.edit_mode);
        assert!(editor.name.is_empty());
    }

    #[test]
    fn test_load_failed_ignored_after_close() {
        let mut editor = UserEditor::new(Some(7));
        editor.close();
        editor.load_failed(ApiError::Status {
            code: 500,
            message: String::new(),
        });
        assert!(editor.load_error.is_none());
    }
}
