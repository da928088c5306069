//! Password generation and strength scoring
//!
//! The editor offers a one-click random password; the strength score
//! feeds the lock indicator next to the password field. Scoring is
//! delegated to zxcvbn and clamped to the 0..=4 scale.

use gatehouse_common::MAX_PASSWORD_SCORE;
use rand::RngExt;

/// Length of generated passwords in characters
pub const PASSWORD_LENGTH: usize = 16;

/// Character pool for generated passwords: letters, digits, symbols
const CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{};:,.?";

fn is_symbol(ch: char) -> bool {
    !ch.is_ascii_alphanumeric()
}

fn has_all_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_symbol)
}

/// Generate a random 16-character password
///
/// The result always contains at least one letter, one digit, and one
/// symbol. Draws that miss a class are discarded and redrawn; with 16
/// characters over this pool a redraw is rare.
pub fn generate() -> String {
    let mut rng = rand::rng();
    loop {
        let password: String = (0..PASSWORD_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();
        if has_all_classes(&password) {
            return password;
        }
    }
}

/// Score a password on the 0..=4 strength scale
///
/// Empty or unscorable input scores 0. Note that 0 is a real score,
/// not an absence: the editor tracks "never scored" separately.
pub fn score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }
    match zxcvbn::zxcvbn(password, &[]) {
        Ok(entropy) => entropy.score().min(MAX_PASSWORD_SCORE),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length() {
        for _ in 0..20 {
            assert_eq!(generate().chars().count(), PASSWORD_LENGTH);
        }
    }

    #[test]
    fn test_generate_contains_all_classes() {
        for _ in 0..20 {
            let password = generate();
            assert!(
                password.chars().any(|c| c.is_ascii_alphabetic()),
                "no letter in {password:?}"
            );
            assert!(
                password.chars().any(|c| c.is_ascii_digit()),
                "no digit in {password:?}"
            );
            assert!(
                password.chars().any(is_symbol),
                "no symbol in {password:?}"
            );
        }
    }

    #[test]
    fn test_generate_not_constant() {
        // Collisions over this pool are negligible
        assert_ne!(generate(), generate());
    }

    #[test]
    fn test_score_range() {
        let generated = generate();
        for password in ["a", "password", "correct horse battery staple", generated.as_str()] {
            assert!(score(password) <= MAX_PASSWORD_SCORE);
        }
    }

    #[test]
    fn test_score_empty_is_zero() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn test_weak_scores_low_strong_scores_high() {
        assert!(score("aaa") <= 1);
        assert!(score("xK9$mQ2&vL7!pR4+") >= 3);
    }
}
