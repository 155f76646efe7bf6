use profilekit_model::ImageFile;

use crate::errors::ProfileEditError;
use crate::form::FieldValue;
use crate::messages::ProfileMessage;
use crate::state::ProfileEditState;
use crate::task::Task;

/// Handle a text or avatar edit
pub fn handle_set_field(
    state: &mut ProfileEditState,
    value: FieldValue,
) -> Task<ProfileMessage> {
    if !state.is_loaded() {
        log::debug!(
            "[ProfileEdit] Ignoring {} edit before profile is loaded",
            value.field().name()
        );
        return Task::none();
    }

    state.form.set_field(value);
    Task::none()
}

/// Handle file picker result
pub fn handle_avatar_selected(
    state: &mut ProfileEditState,
    file: Option<ImageFile>,
) -> Task<ProfileMessage> {
    if !state.is_loaded() {
        log::debug!("[ProfileEdit] Ignoring avatar pick before profile is loaded");
        return Task::none();
    }

    match state.form.select_avatar(file) {
        Ok(()) => {
            log::debug!("[ProfileEdit] Avatar replaced with local image");
            if state.last_failure == Some(ProfileEditError::NoFileSelected) {
                state.last_failure = None;
            }
        }
        Err(error) => {
            log::warn!("[ProfileEdit] {}", error);
            state.last_failure = Some(error);
        }
    }
    Task::none()
}
