//! Domain Value Objects
//!
//! Immutable value types for the todo domain.

use std::fmt;

/// Priority level for a todo (1 = lowest, 5 = highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(i16);

impl Priority {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    pub fn new(level: i16) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Restore from a stored value (table CHECK constraint guarantees range)
    pub fn from_db(level: i16) -> Self {
        Self(level)
    }

    pub fn level(&self) -> i16 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Priority> for i16 {
    fn from(p: Priority) -> Self {
        p.0
    }
}

/// Maximum title length (in characters)
pub const TITLE_MAX_LENGTH: usize = 200;

/// Error returned when title validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    Empty,
    TooLong { length: usize, max: usize },
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Title cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Title is too long ({length} chars, maximum {max})")
            }
        }
    }
}

impl std::error::Error for TitleError {}

/// Validated, trimmed todo title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(input: impl AsRef<str>) -> Result<Self, TitleError> {
        let trimmed = input.as_ref().trim().to_string();

        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > TITLE_MAX_LENGTH {
            return Err(TitleError::TooLong {
                length,
                max: TITLE_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed))
    }

    /// Create from a database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_accepts_full_range() {
        for level in Priority::MIN..=Priority::MAX {
            let p = Priority::new(level).expect("in-range priority");
            assert_eq!(p.level(), level);
        }
    }

    #[test]
    fn test_priority_rejects_out_of_range() {
        assert!(Priority::new(0).is_none());
        assert!(Priority::new(6).is_none());
        assert!(Priority::new(-1).is_none());
        assert!(Priority::new(i16::MAX).is_none());
    }

    #[test]
    fn test_title_trims_whitespace() {
        let title = Title::new("  buy milk  ").unwrap();
        assert_eq!(title.as_str(), "buy milk");
    }

    #[test]
    fn test_title_rejects_empty() {
        assert_eq!(Title::new(""), Err(TitleError::Empty));
        assert_eq!(Title::new("   "), Err(TitleError::Empty));
    }

    #[test]
    fn test_title_rejects_too_long() {
        let long = "x".repeat(TITLE_MAX_LENGTH + 1);
        assert!(matches!(Title::new(&long), Err(TitleError::TooLong { .. })));

        let max = "x".repeat(TITLE_MAX_LENGTH);
        assert!(Title::new(&max).is_ok());
    }
}
