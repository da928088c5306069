//! Username validation
//!
//! Validates username strings.

/// Usernames must be strictly longer than this many characters
///
/// Note the rule is `> 5`: a six-character name is accepted. The
/// operator-facing copy for the short-name error says "more than 6",
/// which disagrees with this boundary; the rule here is the one the
/// service has always enforced.
pub const MIN_USERNAME_LENGTH: usize = 5;

/// Validation error for usernames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    /// Username is five characters or fewer (empty included)
    TooShort,
    /// Username contains characters outside ASCII letters and `_`
    InvalidCharacters,
}

/// Validate a username
///
/// Checks:
/// - More than 5 characters long
/// - Contains only ASCII letters (`A-Z`, `a-z`) and underscores
///
/// Length is checked first, so a short name with invalid characters
/// reports `TooShort`.
///
/// # Errors
///
/// Returns a `UsernameError` variant describing the validation failure.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.chars().count() <= MIN_USERNAME_LENGTH {
        return Err(UsernameError::TooShort);
    }
    for ch in username.chars() {
        if !ch.is_ascii_alphabetic() && ch != '_' {
            return Err(UsernameError::InvalidCharacters);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("operator_one").is_ok());
        assert!(validate_username("Administrator").is_ok());
        assert!(validate_username("______").is_ok());
        assert!(validate_username("aBcDeF").is_ok());
    }

    #[test]
    fn test_six_character_boundary() {
        // The rule is "> 5": exactly six letters must pass.
        assert!(validate_username("abcdef").is_ok());
        assert_eq!(validate_username("abcde"), Err(UsernameError::TooShort));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(validate_username(""), Err(UsernameError::TooShort));
        assert_eq!(validate_username("ab"), Err(UsernameError::TooShort));
        // Short names take the length branch even when the characters
        // are also invalid.
        assert_eq!(validate_username("a!b"), Err(UsernameError::TooShort));
        assert_eq!(validate_username("12345"), Err(UsernameError::TooShort));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_username("operator one"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            validate_username("operator1"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            validate_username("operator-one"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            validate_username("operator.one"),
            Err(UsernameError::InvalidCharacters)
        );
        // Non-ASCII letters are outside the pattern
        assert_eq!(
            validate_username("Пользователь"),
            Err(UsernameError::InvalidCharacters)
        );
    }
}
