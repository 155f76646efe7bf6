pub mod fields;
pub mod gate;
pub mod submit;

use crate::form::FieldValue;
use crate::messages::ProfileMessage;
use crate::services::EditorServices;
use crate::state::ProfileEditState;
use crate::task::Task;

/// Main profile edit update handler
/// Returns the task whose output is the next message, if any
pub fn update_profile_edit(
    state: &mut ProfileEditState,
    services: &EditorServices,
    message: ProfileMessage,
) -> Task<ProfileMessage> {
    if state.torn_down {
        log::debug!("[ProfileEdit] Discarding {} after teardown", message.name());
        return Task::none();
    }
    log::trace!("[ProfileEdit] {}", message.name());

    match message {
        // Identity gate
        ProfileMessage::SessionChanged(session) => {
            gate::handle_session_changed(state, services, session)
        }
        ProfileMessage::ProfileLoaded { user_id, result } => {
            gate::handle_profile_loaded(state, services, user_id, result)
        }

        // Fields
        ProfileMessage::UpdateDisplayName(value) => {
            fields::handle_set_field(state, FieldValue::DisplayName(value))
        }
        ProfileMessage::UpdateHandle(value) => {
            fields::handle_set_field(state, FieldValue::Handle(value))
        }
        ProfileMessage::UpdateAboutMe(value) => {
            fields::handle_set_field(state, FieldValue::AboutMe(value))
        }
        ProfileMessage::AvatarSelected(file) => {
            fields::handle_avatar_selected(state, file)
        }

        // Submit pipeline
        ProfileMessage::Submit => submit::handle_submit(state, services),
        ProfileMessage::AvatarUploaded { attempt, result } => {
            submit::handle_avatar_uploaded(state, services, attempt, result)
        }
        ProfileMessage::ProfilePersisted { attempt, result } => {
            submit::handle_profile_persisted(state, services, attempt, result)
        }
        ProfileMessage::OrphanRemoved { path, result } => {
            submit::handle_orphan_removed(path, result)
        }
    }
}
