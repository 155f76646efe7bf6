//! Read-only projection of the editor for rendering.

use profilekit_core::{FieldErrors, ProfileField};
use profilekit_model::AvatarRef;
use url::Url;

use crate::state::{ProfileEditState, SubmitPhase};

/// What the avatar slot should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarPreview {
    /// Stored avatar, rendered from its public URL
    Remote(Url),
    /// Image picked in this session, not uploaded yet
    Local { file_name: String, size: usize },
    Placeholder,
}

impl From<&AvatarRef> for AvatarPreview {
    fn from(avatar: &AvatarRef) -> Self {
        match avatar {
            _ if avatar.is_placeholder() => AvatarPreview::Placeholder,
            AvatarRef::Remote(url) => AvatarPreview::Remote(url.clone()),
            AvatarRef::Local(image) => AvatarPreview::Local {
                file_name: image.file_name.clone(),
                size: image.len(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFormView {
    pub display_name: String,
    pub handle: String,
    pub avatar: AvatarPreview,
    pub about_me: String,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
    /// Disable the submit button while true
    pub submitting: bool,
    pub dirty: bool,
    /// Last pipeline or picker failure, shown above the form
    pub failure: Option<String>,
}

impl ProfileFormView {
    /// `None` while the profile has not been loaded; the host renders a
    /// loading indicator instead of the fields.
    pub fn from_state(state: &ProfileEditState) -> Option<Self> {
        if !state.is_loaded() {
            return None;
        }

        let values = state.form.values();
        Some(Self {
            display_name: values.display_name.clone(),
            handle: values.handle.clone(),
            avatar: AvatarPreview::from(&values.avatar),
            about_me: values.about_me.clone(),
            errors: state.form.errors().clone(),
            phase: state.phase,
            submitting: state.phase.in_flight(),
            dirty: state.form.is_dirty(),
            failure: state.last_failure.as_ref().map(ToString::to_string),
        })
    }

    pub fn error(&self, field: ProfileField) -> Option<&str> {
        self.errors.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilekit_model::ImageFile;

    #[test]
    fn hidden_until_loaded() {
        let state = ProfileEditState::default();
        assert!(ProfileFormView::from_state(&state).is_none());
    }

    #[test]
    fn preview_reflects_avatar_kind() {
        assert_eq!(
            AvatarPreview::from(&AvatarRef::default()),
            AvatarPreview::Placeholder
        );

        let picked = AvatarRef::Local(ImageFile::new("me.png", "image/png", vec![0; 3]));
        assert_eq!(
            AvatarPreview::from(&picked),
            AvatarPreview::Local {
                file_name: "me.png".into(),
                size: 3
            }
        );
    }
}
