use std::sync::Arc;

use profilekit_core::{ProfileDraft, ProfileStore};
use profilekit_model::{Session, UserId};

use crate::errors::ProfileEditError;
use crate::form::ProfileForm;
use crate::messages::{LoadedProfile, ProfileMessage};
use crate::services::EditorServices;
use crate::state::{LoadState, ProfileEditState};
use crate::task::Task;

/// What a session change means for the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session went away; forget it but keep whatever was loaded
    ClearSession,
    /// Same identity as the last load, only the token moved
    RefreshSession,
    /// New identity, run the load
    Load(UserId),
}

/// Compare an incoming session with the identity the gate last ran for.
pub fn decide(
    gated_for: Option<UserId>,
    incoming: Option<&Session>,
) -> GateDecision {
    match incoming {
        None => GateDecision::ClearSession,
        Some(session) if gated_for == Some(session.user_id) => {
            GateDecision::RefreshSession
        }
        Some(session) => GateDecision::Load(session.user_id),
    }
}

/// Read the record and check its existence concurrently, reporting once
/// both have finished.
pub async fn load_profile(
    profiles: Arc<dyn ProfileStore>,
    user_id: UserId,
) -> Result<LoadedProfile, String> {
    let (record, exists) =
        futures::join!(profiles.read(user_id), profiles.exists(user_id));

    Ok(LoadedProfile {
        record: record.map_err(|e| e.to_string())?,
        exists: exists.map_err(|e| e.to_string())?,
    })
}

/// Handle session provider change
pub fn handle_session_changed(
    state: &mut ProfileEditState,
    services: &EditorServices,
    session: Option<Session>,
) -> Task<ProfileMessage> {
    match decide(state.load_state.user_id(), session.as_ref()) {
        GateDecision::ClearSession => {
            if state.session.take().is_some() {
                log::info!("[Gate] Session cleared");
            }
            Task::none()
        }
        GateDecision::RefreshSession => {
            log::debug!("[Gate] Session refreshed, keeping loaded profile");
            state.session = session;
            Task::none()
        }
        GateDecision::Load(user_id) => {
            log::info!("[Gate] Loading profile for {}", user_id);
            state.session = session;
            state.load_state = LoadState::InProgress { user_id };
            state.form = ProfileForm::default();
            state.saved_avatar_url = None;
            state.last_failure = None;
            state.abandon_submit();

            Task::perform(
                load_profile(Arc::clone(&services.profiles), user_id),
                move |result| ProfileMessage::ProfileLoaded { user_id, result },
            )
        }
    }
}

/// Handle joined load completion
pub fn handle_profile_loaded(
    state: &mut ProfileEditState,
    services: &EditorServices,
    user_id: UserId,
    result: Result<LoadedProfile, String>,
) -> Task<ProfileMessage> {
    if state.load_state != (LoadState::InProgress { user_id }) {
        log::debug!("[Gate] Discarding stale load result for {}", user_id);
        return Task::none();
    }

    match result {
        Ok(LoadedProfile {
            exists: false, ..
        }) => {
            log::info!(
                "[Gate] No profile for {}, returning to {}",
                user_id,
                services.config.navigation.home_route
            );
            state.load_state = LoadState::Missing { user_id };
            services
                .navigator
                .go_to(services.config.navigation.home_route.clone());
        }
        Ok(LoadedProfile {
            record: Some(record),
            exists: true,
        }) => {
            state.form.reset(ProfileDraft::from_record(&record));
            state.saved_avatar_url = Some(record.avatar_url);
            state.load_state = LoadState::Loaded { user_id };
            log::info!("[Gate] Profile loaded for {}", user_id);
        }
        Ok(LoadedProfile { record: None, .. }) => {
            let error = "profile record vanished during load".to_string();
            log::error!("[Gate] {} ({})", error, user_id);
            state.last_failure = Some(ProfileEditError::LoadFailed(error.clone()));
            state.load_state = LoadState::Failed {
                user_id,
                last_error: error,
            };
        }
        Err(error) => {
            log::error!("[Gate] Failed to load profile for {}: {}", user_id, error);
            state.last_failure = Some(ProfileEditError::LoadFailed(error.clone()));
            state.load_state = LoadState::Failed {
                user_id,
                last_error: error,
            };
        }
    }
    Task::none()
}
