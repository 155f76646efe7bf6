//! Failures surfaced by the profile editor

use profilekit_core::FieldErrors;
use thiserror::Error;

/// Last failure recorded by the editor; shown by the host next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileEditError {
    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Avatar upload failed or returned no object reference
    #[error("Failed to upload image: {0}")]
    UploadFailed(String),

    /// Upload path could not be turned into a public URL
    #[error("Invalid avatar URL: {0}")]
    InvalidAvatarUrl(String),

    /// Profile write failed after the avatar was stored
    #[error("Failed to update profile: {0}")]
    PersistFailed(String),

    /// Session went away before the profile could be written
    #[error("Session ended before the profile was saved")]
    SessionLost,

    /// Reading the profile or checking its existence failed
    #[error("Failed to load profile: {0}")]
    LoadFailed(String),

    /// File picker closed without a file
    #[error("No file selected")]
    NoFileSelected,
}
