//! Profile editor messages
//!
//! Inputs from the host (session changes, field edits, submit) and the
//! completions of the editor's own async work share one enum.

use profilekit_model::{ImageFile, ProfileRecord, Session, UploadedObject, UserId};

/// Result of the joined profile read and existence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProfile {
    pub record: Option<ProfileRecord>,
    pub exists: bool,
}

/// Messages for the profile edit form
#[derive(Debug, Clone)]
pub enum ProfileMessage {
    // Identity gate
    /// Session provider reported a new value (possibly none)
    SessionChanged(Option<Session>),
    /// Initial load finished for `user_id`
    ProfileLoaded {
        user_id: UserId,
        result: Result<LoadedProfile, String>,
    },

    // Fields
    /// Update display name field
    UpdateDisplayName(String),
    /// Update handle field
    UpdateHandle(String),
    /// Update about-me field
    UpdateAboutMe(String),
    /// File picker closed, with the chosen image if any
    AvatarSelected(Option<ImageFile>),

    // Submit pipeline
    /// Validate and save
    Submit,
    /// Avatar upload finished for submit `attempt`
    AvatarUploaded {
        attempt: u64,
        result: Result<Option<UploadedObject>, String>,
    },
    /// Profile write finished for submit `attempt`
    ProfilePersisted {
        attempt: u64,
        result: Result<(), String>,
    },
    /// Best-effort removal of an upload whose profile write failed
    OrphanRemoved {
        path: String,
        result: Result<(), String>,
    },
}

impl ProfileMessage {
    /// Get a static name for logging/debugging
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionChanged(_) => "ProfileEdit::SessionChanged",
            Self::ProfileLoaded { .. } => "ProfileEdit::ProfileLoaded",
            Self::UpdateDisplayName(_) => "ProfileEdit::UpdateDisplayName",
            Self::UpdateHandle(_) => "ProfileEdit::UpdateHandle",
            Self::UpdateAboutMe(_) => "ProfileEdit::UpdateAboutMe",
            Self::AvatarSelected(_) => "ProfileEdit::AvatarSelected",
            Self::Submit => "ProfileEdit::Submit",
            Self::AvatarUploaded { .. } => "ProfileEdit::AvatarUploaded",
            Self::ProfilePersisted { .. } => "ProfileEdit::ProfilePersisted",
            Self::OrphanRemoved { .. } => "ProfileEdit::OrphanRemoved",
        }
    }
}
