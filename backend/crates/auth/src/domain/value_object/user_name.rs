//! User Name Value Object
//!
//! The username is the public handle a user logs in and is displayed
//! with. Uniqueness is a case-sensitive exact match against the store,
//! so no case folding happens here - `Alice` and `alice` are distinct
//! names.
//!
//! ## Invariants
//! - 3 to 30 characters after NFKC normalization and trimming
//! - ASCII letters, digits and `_ . - +` only
//! - Starts and ends with a letter, digit or `_`
//! - No consecutive dots (`..`)
//! - Contains at least one letter or digit

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for a user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in a user name
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after normalization
    Empty,

    /// User name is too short
    TooShort { length: usize, min: usize },

    /// User name is too long
    TooLong { length: usize, max: usize },

    /// User name contains an invalid character
    InvalidCharacter { char: char, position: usize },

    /// User name starts with an invalid character
    InvalidStart { char: char },

    /// User name ends with an invalid character
    InvalidEnd { char: char },

    /// User name contains consecutive dots (..)
    ConsecutiveDots,

    /// User name contains no alphanumeric characters
    NoAlphanumeric,

    /// User name contains whitespace
    ContainsWhitespace,
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
            Self::TooShort { length, min } => {
                write!(f, "User name is too short ({length} chars, minimum {min})")
            }
            Self::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "Invalid character '{char}' at position {position}. Only letters, digits, _, ., -, + are allowed"
                )
            }
            Self::InvalidStart { char } => {
                write!(
                    f,
                    "User name cannot start with '{char}'. Must start with a letter, digit, or _"
                )
            }
            Self::InvalidEnd { char } => {
                write!(
                    f,
                    "User name cannot end with '{char}'. Must end with a letter, digit, or _"
                )
            }
            Self::ConsecutiveDots => {
                write!(f, "User name cannot contain consecutive dots (..)")
            }
            Self::NoAlphanumeric => {
                write!(f, "User name must contain at least one letter or digit")
            }
            Self::ContainsWhitespace => {
                write!(f, "User name cannot contain whitespace")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated, normalized user name
///
/// Normalization is trim + NFKC; case is preserved because store lookups
/// are exact matches.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized = Self::normalize(input.as_ref());
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Get the user name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Create from a database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Normalize input string (trim and NFKC, preserve case)
    fn normalize(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    /// Validate the normalized user name
    fn validate(name: &str) -> Result<(), UserNameError> {
        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if name.chars().any(|c| c.is_whitespace()) {
            return Err(UserNameError::ContainsWhitespace);
        }

        for (pos, ch) in name.chars().enumerate() {
            if !Self::is_valid_char(ch) {
                return Err(UserNameError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        let first_char = name.chars().next().unwrap();
        if !Self::is_valid_start_end_char(first_char) {
            return Err(UserNameError::InvalidStart { char: first_char });
        }

        let last_char = name.chars().next_back().unwrap();
        if !Self::is_valid_start_end_char(last_char) {
            return Err(UserNameError::InvalidEnd { char: last_char });
        }

        if name.contains("..") {
            return Err(UserNameError::ConsecutiveDots);
        }

        if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(UserNameError::NoAlphanumeric);
        }

        Ok(())
    }

    /// Check if character is valid in a user name
    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(&c)
    }

    /// Check if character is valid at start or end of a user name
    #[inline]
    fn is_valid_start_end_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn test_trim_whitespace() {
            let name = UserName::new("  alice  ").unwrap();
            assert_eq!(name.as_str(), "alice");
        }

        #[test]
        fn test_case_preserved() {
            let name = UserName::new("Alice").unwrap();
            assert_eq!(name.as_str(), "Alice");
        }

        #[test]
        fn test_distinct_by_case() {
            let upper = UserName::new("Alice").unwrap();
            let lower = UserName::new("alice").unwrap();
            assert_ne!(upper, lower);
        }

        #[test]
        fn test_nfkc_normalization() {
            // Full-width 'Ａ' (U+FF21) normalizes to ASCII 'A'
            let name = UserName::new("Ａlice").unwrap();
            assert_eq!(name.as_str(), "Alice");
        }
    }

    mod length_validation {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert!(matches!(UserName::new(""), Err(UserNameError::Empty)));
        }

        #[test]
        fn test_whitespace_only_fails() {
            assert!(matches!(UserName::new("   "), Err(UserNameError::Empty)));
        }

        #[test]
        fn test_too_short() {
            assert!(matches!(
                UserName::new("ab"),
                Err(UserNameError::TooShort { length: 2, min: 3 })
            ));
        }

        #[test]
        fn test_minimum_length() {
            assert!(UserName::new("abc").is_ok());
        }

        #[test]
        fn test_too_long() {
            let input = "a".repeat(USER_NAME_MAX_LENGTH + 1);
            assert!(matches!(
                UserName::new(&input),
                Err(UserNameError::TooLong { .. })
            ));
        }
    }

    mod character_validation {
        use super::*;

        #[test]
        fn test_valid_alphanumeric() {
            assert!(UserName::new("alice123").is_ok());
        }

        #[test]
        fn test_valid_specials() {
            assert!(UserName::new("alice_bob").is_ok());
            assert!(UserName::new("alice.bob").is_ok());
            assert!(UserName::new("alice-bob").is_ok());
            assert!(UserName::new("alice+tag").is_ok());
        }

        #[test]
        fn test_invalid_special_char() {
            assert!(matches!(
                UserName::new("alice@bob"),
                Err(UserNameError::InvalidCharacter { char: '@', .. })
            ));
        }

        #[test]
        fn test_invalid_unicode() {
            assert!(matches!(
                UserName::new("日本語"),
                Err(UserNameError::InvalidCharacter { .. })
            ));
        }
    }

    mod position_validation {
        use super::*;

        #[test]
        fn test_start_with_underscore() {
            assert!(UserName::new("_alice").is_ok());
        }

        #[test]
        fn test_start_with_dot_fails() {
            assert!(matches!(
                UserName::new(".alice"),
                Err(UserNameError::InvalidStart { char: '.' })
            ));
        }

        #[test]
        fn test_end_with_hyphen_fails() {
            assert!(matches!(
                UserName::new("alice-"),
                Err(UserNameError::InvalidEnd { char: '-' })
            ));
        }
    }

    mod pattern_validation {
        use super::*;

        #[test]
        fn test_consecutive_dots_fails() {
            assert!(matches!(
                UserName::new("alice..bob"),
                Err(UserNameError::ConsecutiveDots)
            ));
        }

        #[test]
        fn test_symbols_only_fails() {
            assert!(matches!(
                UserName::new("___"),
                Err(UserNameError::NoAlphanumeric)
            ));
        }

        #[test]
        fn test_whitespace_in_middle_fails() {
            assert!(matches!(
                UserName::new("alice bob"),
                Err(UserNameError::ContainsWhitespace)
            ));
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn test_serialize() {
            let name = UserName::new("alice").unwrap();
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, "\"alice\"");
        }

        #[test]
        fn test_deserialize_invalid() {
            let json = "\"ab\""; // too short
            let result: Result<UserName, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }
    }
}
