use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name value object with validation
///
/// Represents a validated display name that follows the business rules:
/// - at least 2 characters in length
/// - no upper bound
/// - preserves original formatting, whitespace and case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Minimum number of characters (Unicode scalar values)
    pub const MIN_CHARS: usize = 2;

    /// Create a new display name with validation
    pub fn new(display_name: impl AsRef<str>) -> Result<Self, DisplayNameError> {
        let display_name = display_name.as_ref();

        if display_name.chars().count() < Self::MIN_CHARS {
            return Err(DisplayNameError::TooShort);
        }

        Ok(Self(display_name.to_string()))
    }

    /// Get the display name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the display name as a String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when creating a display name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayNameError {
    /// Fewer than two characters
    #[error("Username must be at least 2 characters.")]
    TooShort,
}
