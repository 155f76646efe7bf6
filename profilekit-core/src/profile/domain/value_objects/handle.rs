use serde::{Deserialize, Serialize};
use std::fmt;

/// Short user-chosen handle shown as `@handle`.
///
/// At most [`Handle::MAX_CHARS`] characters; empty handles are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(String);

impl Handle {
    /// Longest handle accepted, in characters
    pub const MAX_CHARS: usize = 4;

    /// Accept `handle` if it fits within [`Handle::MAX_CHARS`]
    pub fn new(handle: impl AsRef<str>) -> Result<Self, HandleError> {
        let handle = handle.as_ref();

        if handle.chars().count() > Self::MAX_CHARS {
            return Err(HandleError::TooLong);
        }

        Ok(Self(handle.to_string()))
    }

    /// Borrow the handle text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the handle text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when creating a handle
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    /// More than four characters
    #[error("Handle must be at most 4 characters.")]
    TooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_up_to_four_characters() {
        assert!(Handle::new("").is_ok());
        assert!(Handle::new("al").is_ok());
        assert!(Handle::new("abcd").is_ok());
        assert!(Handle::new("ñäöü").is_ok());
    }

    #[test]
    fn rejects_five_or_more() {
        assert_eq!(Handle::new("abcde"), Err(HandleError::TooLong));
        assert_eq!(
            HandleError::TooLong.to_string(),
            "Handle must be at most 4 characters."
        );
    }
}
