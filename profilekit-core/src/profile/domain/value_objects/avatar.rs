use profilekit_model::AvatarRef;

/// Avatar rule failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvatarError {
    /// Still the empty placeholder
    #[error("Avatar must be a file.")]
    NotAFile,
}

/// A stored remote avatar or a non-empty local image passes; the empty
/// placeholder does not.
pub fn validate_avatar(avatar: &AvatarRef) -> Result<(), AvatarError> {
    if avatar.is_placeholder() {
        return Err(AvatarError::NotAFile);
    }
    Ok(())
}
