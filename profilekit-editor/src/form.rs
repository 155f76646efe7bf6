//! Form state manager
//!
//! Owns the editable draft and its per-field errors for one edit session.

use profilekit_core::{FieldErrors, ProfileDraft, ProfileField, ValidatedProfile};
use profilekit_model::{AvatarRef, ImageFile};

use crate::errors::ProfileEditError;

/// New value for exactly one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    DisplayName(String),
    Handle(String),
    Avatar(AvatarRef),
    AboutMe(String),
}

impl FieldValue {
    pub fn field(&self) -> ProfileField {
        match self {
            FieldValue::DisplayName(_) => ProfileField::DisplayName,
            FieldValue::Handle(_) => ProfileField::Handle,
            FieldValue::Avatar(_) => ProfileField::Avatar,
            FieldValue::AboutMe(_) => ProfileField::AboutMe,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    values: ProfileDraft,
    errors: FieldErrors,
    /// Whether the form has unsaved changes
    dirty: bool,
}

impl ProfileForm {
    pub fn new(values: ProfileDraft) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &ProfileDraft {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace every field at once and drop errors and dirty state.
    pub fn reset(&mut self, values: ProfileDraft) {
        self.values = values;
        self.errors.clear();
        self.dirty = false;
    }

    /// Update one field. Errors are left as they are until the next
    /// `validate`.
    pub fn set_field(&mut self, value: FieldValue) {
        match value {
            FieldValue::DisplayName(name) => self.values.display_name = name,
            FieldValue::Handle(handle) => self.values.handle = handle,
            FieldValue::Avatar(avatar) => self.values.avatar = avatar,
            FieldValue::AboutMe(about) => self.values.about_me = about,
        }
        self.dirty = true;
    }

    /// Replace the avatar with a freshly picked file. Closing the picker
    /// without a file leaves the current avatar in place.
    pub fn select_avatar(
        &mut self,
        file: Option<ImageFile>,
    ) -> Result<(), ProfileEditError> {
        let file = file.ok_or(ProfileEditError::NoFileSelected)?;
        self.set_field(FieldValue::Avatar(AvatarRef::Local(file)));
        Ok(())
    }

    /// Run every field rule and store the resulting errors.
    pub fn validate(&mut self) -> Result<ValidatedProfile, FieldErrors> {
        match self.values.validate() {
            Ok(validated) => {
                self.errors.clear();
                Ok(validated)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Mark the current values as saved
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
