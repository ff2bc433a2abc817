//! Secret word validation.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::MAX_PASSWORD_LENGTH;

/// Reason a candidate password was rejected.
///
/// Hosts re-prompt on either variant; the core never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Empty, or contains something other than the letters A-Z.
    #[display("Password must only contain letters A-Z")]
    EmptyOrNonAlpha,
    /// More than [`MAX_PASSWORD_LENGTH`] letters.
    #[display("Password must be at most {} letters long", MAX_PASSWORD_LENGTH)]
    TooLong,
}

impl ValidationError {
    /// Combined hint shown by hosts after any rejection.
    pub const HINT: &'static str =
        "Password must be less than 10 characters and only contain letters A-Z.";
}

/// A validated secret word.
///
/// Holds 1 to [`MAX_PASSWORD_LENGTH`] ASCII letters in their original casing.
/// The `Debug` output hides the letters so passwords stay out of logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Password(String);

impl Password {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyOrNonAlpha`] for an empty string or any
    /// non-letter character, otherwise [`ValidationError::TooLong`] when the
    /// word exceeds [`MAX_PASSWORD_LENGTH`].
    #[instrument(skip(raw), fields(len = raw.len()))]
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            debug!("Rejected password: empty or non-alphabetic");
            return Err(ValidationError::EmptyOrNonAlpha);
        }
        if raw.len() > MAX_PASSWORD_LENGTH {
            debug!("Rejected password: too long");
            return Err(ValidationError::TooLong);
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the word exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a validated password has at least one letter.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password").field("len", &self.0.len()).finish()
    }
}

impl TryFrom<&str> for Password {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

/// Checks `raw` against the password rules without keeping it.
///
/// Any host collecting a password calls this (or [`Password::parse`]) so every
/// entry point enforces the same rule.
pub fn validate_password(raw: &str) -> Result<(), ValidationError> {
    Password::parse(raw).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_mixed_case_letters() {
        let password = Password::parse("HeLLo").unwrap();
        assert_eq!(password.as_str(), "HeLLo");
        assert_eq!(password.len(), 5);
    }

    #[test]
    fn test_accepts_boundary_lengths() {
        assert!(Password::parse("a").is_ok());
        assert!(Password::parse("abcdefghij").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Password::parse(""), Err(ValidationError::EmptyOrNonAlpha));
    }

    #[test]
    fn test_rejects_non_letters() {
        for raw in ["abc1", "with space", "dash-ed", "ümlaut", " cat"] {
            assert_eq!(
                Password::parse(raw),
                Err(ValidationError::EmptyOrNonAlpha),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_eleven_letters() {
        assert_eq!(Password::parse("abcdefghijk"), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_non_alpha_reported_before_length() {
        assert_eq!(
            Password::parse("abcdefghij12"),
            Err(ValidationError::EmptyOrNonAlpha)
        );
    }

    #[test]
    fn test_debug_hides_letters() {
        let password = Password::parse("secret").unwrap();
        let rendered = format!("{:?}", password);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains('6'));
    }

    #[test]
    fn test_validate_password_matches_parse() {
        assert!(validate_password("dog").is_ok());
        assert_eq!(validate_password("d0g"), Err(ValidationError::EmptyOrNonAlpha));
    }
}
