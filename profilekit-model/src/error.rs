use std::fmt::{self, Display};

/// Errors produced by model constructors and parsers.
#[derive(Debug)]
pub enum ModelError {
    InvalidUserId(uuid::Error),
    InvalidUrl(url::ParseError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidUserId(err) => {
                write!(f, "invalid user id: {err}")
            }
            ModelError::InvalidUrl(err) => write!(f, "invalid url: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidUserId(err) => Some(err),
            ModelError::InvalidUrl(err) => Some(err),
        }
    }
}

impl From<uuid::Error> for ModelError {
    fn from(err: uuid::Error) -> Self {
        ModelError::InvalidUserId(err)
    }
}

impl From<url::ParseError> for ModelError {
    fn from(err: url::ParseError) -> Self {
        ModelError::InvalidUrl(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
