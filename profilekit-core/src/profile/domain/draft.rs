use profilekit_model::{AvatarRef, ProfileRecord};

use super::validation::FieldErrors;
use super::value_objects::{DisplayName, Handle, validate_avatar};

/// Editable fields of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    /// Name shown on the profile
    DisplayName,
    /// Short `@handle`
    Handle,
    /// Profile picture
    Avatar,
    /// Free-text bio
    AboutMe,
}

impl ProfileField {
    /// Stable snake_case name used in logs and error maps
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::DisplayName => "display_name",
            ProfileField::Handle => "handle",
            ProfileField::Avatar => "avatar",
            ProfileField::AboutMe => "about_me",
        }
    }
}

/// In-memory editable copy of a profile, not yet persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    /// Raw display name as typed
    pub display_name: String,
    /// Raw handle as typed
    pub handle: String,
    /// Stored remote avatar or a freshly picked local image
    pub avatar: AvatarRef,
    /// Bio text, never validated
    pub about_me: String,
}

impl ProfileDraft {
    /// Seed a draft from the stored record, keeping the stored avatar as a
    /// remote reference.
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            display_name: record.name.clone(),
            handle: record.handle.clone(),
            avatar: AvatarRef::from_stored_url(&record.avatar_url),
            about_me: record.bio.clone(),
        }
    }

    /// Run every field rule. Each field is checked independently so all
    /// failing fields are reported together.
    pub fn validate(&self) -> Result<ValidatedProfile, FieldErrors> {
        let mut errors = FieldErrors::default();

        let display_name = DisplayName::new(&self.display_name)
            .map_err(|err| errors.insert(ProfileField::DisplayName, err))
            .ok();
        let handle = Handle::new(&self.handle)
            .map_err(|err| errors.insert(ProfileField::Handle, err))
            .ok();
        let avatar = validate_avatar(&self.avatar)
            .map_err(|err| errors.insert(ProfileField::Avatar, err))
            .ok();

        match (display_name, handle, avatar) {
            (Some(display_name), Some(handle), Some(())) => Ok(ValidatedProfile {
                display_name,
                handle,
                avatar: self.avatar.clone(),
                about_me: self.about_me.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// A draft that passed validation and may be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProfile {
    /// Checked display name
    pub display_name: DisplayName,
    /// Checked handle
    pub handle: Handle,
    /// Never the placeholder
    pub avatar: AvatarRef,
    pub about_me: String,
}
