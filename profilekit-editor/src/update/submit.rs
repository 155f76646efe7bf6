use std::sync::Arc;

use profilekit_core::{ImageStore, ProfileStore};
use profilekit_model::{
    AvatarRef, ImageFile, ProfileUpdate, Session, UploadedObject, UserId,
};
use url::Url;

use crate::errors::ProfileEditError;
use crate::messages::ProfileMessage;
use crate::services::EditorServices;
use crate::state::{PendingSubmit, ProfileEditState, SubmitPhase};
use crate::task::Task;

pub async fn upload_avatar(
    images: Arc<dyn ImageStore>,
    image: ImageFile,
    owner: UserId,
) -> Result<Option<UploadedObject>, String> {
    images.upload(image, owner).await.map_err(|e| e.to_string())
}

pub async fn persist_profile(
    profiles: Arc<dyn ProfileStore>,
    session: Session,
    update: ProfileUpdate,
) -> Result<(), String> {
    profiles
        .write(&session, update)
        .await
        .map_err(|e| e.to_string())
}

/// Remove an upload that no write will reference, unless the stored record
/// already points at it.
fn discard_upload(
    state: &ProfileEditState,
    services: &EditorServices,
    object: UploadedObject,
) -> Task<ProfileMessage> {
    let referenced = match (
        services.config.storage.public_url(&object.path),
        state.saved_avatar_url.as_deref(),
    ) {
        (Ok(url), Some(saved)) => url.as_str() == saved,
        _ => false,
    };
    if referenced {
        log::warn!(
            "[Submit] Keeping upload {}, the saved profile still uses it",
            object.path
        );
        return Task::none();
    }
    remove_orphan(services, object)
}

/// Best-effort delete of an object no profile points at
pub fn remove_orphan(
    services: &EditorServices,
    object: UploadedObject,
) -> Task<ProfileMessage> {
    log::info!("[Submit] Removing orphaned upload {}", object.path);
    let images = Arc::clone(&services.images);
    let path = object.path.clone();
    Task::perform(
        async move { images.remove(&object).await.map_err(|e| e.to_string()) },
        move |result| ProfileMessage::OrphanRemoved { path, result },
    )
}

/// Handle submit
pub fn handle_submit(
    state: &mut ProfileEditState,
    services: &EditorServices,
) -> Task<ProfileMessage> {
    if !state.is_loaded() {
        log::warn!("[Submit] Ignored, profile not loaded");
        return Task::none();
    }
    if state.phase == SubmitPhase::Navigating {
        log::warn!("[Submit] Ignored, profile already saved");
        return Task::none();
    }
    if state.phase.in_flight() {
        log::warn!("[Submit] Ignored, a submit is already in progress");
        return Task::none();
    }
    let Some(owner) = state.current_user() else {
        log::warn!("[Submit] Ignored, no session");
        return Task::none();
    };

    state.phase = SubmitPhase::Validating;
    let profile = match state.form.validate() {
        Ok(profile) => profile,
        Err(errors) => {
            log::info!("[Submit] Validation failed: {}", errors);
            state.phase = SubmitPhase::Idle;
            state.last_failure = Some(ProfileEditError::Validation(errors));
            return Task::none();
        }
    };

    state.attempt += 1;
    let attempt = state.attempt;
    state.last_failure = None;
    let avatar = profile.avatar.clone();
    state.pending = Some(PendingSubmit {
        attempt,
        profile,
        uploaded: None,
        avatar_url: None,
    });

    match avatar {
        AvatarRef::Local(image) => {
            log::info!(
                "[Submit] Uploading avatar ({} bytes) for attempt {}",
                image.len(),
                attempt
            );
            state.phase = SubmitPhase::UploadingAvatar;
            Task::perform(
                upload_avatar(Arc::clone(&services.images), image, owner),
                move |result| ProfileMessage::AvatarUploaded { attempt, result },
            )
        }
        AvatarRef::Remote(url) => {
            log::debug!("[Submit] Avatar unchanged, skipping upload");
            start_persist(state, services, url)
        }
    }
}

/// Move the pending attempt into the persist step
fn start_persist(
    state: &mut ProfileEditState,
    services: &EditorServices,
    avatar_url: Url,
) -> Task<ProfileMessage> {
    if state.session.is_none() {
        return fail_attempt(state, services, ProfileEditError::SessionLost);
    }
    let (Some(pending), Some(session)) = (state.pending.as_mut(), &state.session)
    else {
        state.phase = SubmitPhase::Idle;
        return Task::none();
    };

    pending.avatar_url = Some(avatar_url.clone());
    let attempt = pending.attempt;
    let update = ProfileUpdate {
        handle: pending.profile.handle.as_str().to_string(),
        display_name: pending.profile.display_name.as_str().to_string(),
        avatar_url,
        about_me: pending.profile.about_me.clone(),
    };
    state.phase = SubmitPhase::PersistingProfile;
    log::info!("[Submit] Persisting profile for attempt {}", attempt);

    Task::perform(
        persist_profile(Arc::clone(&services.profiles), session.clone(), update),
        move |result| ProfileMessage::ProfilePersisted { attempt, result },
    )
}

/// Record a failed attempt and return to idle
fn fail_attempt(
    state: &mut ProfileEditState,
    services: &EditorServices,
    error: ProfileEditError,
) -> Task<ProfileMessage> {
    log::error!("[Submit] {}", error);
    state.phase = SubmitPhase::Idle;
    state.last_failure = Some(error);
    match state.pending.take().and_then(|pending| pending.uploaded) {
        Some(object) => discard_upload(state, services, object),
        None => Task::none(),
    }
}

fn is_current(state: &ProfileEditState, attempt: u64) -> bool {
    state
        .pending
        .as_ref()
        .is_some_and(|pending| pending.attempt == attempt)
}

/// Handle avatar upload completion
pub fn handle_avatar_uploaded(
    state: &mut ProfileEditState,
    services: &EditorServices,
    attempt: u64,
    result: Result<Option<UploadedObject>, String>,
) -> Task<ProfileMessage> {
    if !is_current(state, attempt) {
        log::debug!("[Submit] Discarding upload result for stale attempt {}", attempt);
        // Nothing will ever reference an upload from an abandoned attempt
        return match result {
            Ok(Some(object)) => discard_upload(state, services, object),
            _ => Task::none(),
        };
    }

    let object = match result {
        Ok(Some(object)) => object,
        Ok(None) => {
            return fail_attempt(
                state,
                services,
                ProfileEditError::UploadFailed(
                    "storage returned no object reference".to_string(),
                ),
            );
        }
        Err(error) => {
            return fail_attempt(
                state,
                services,
                ProfileEditError::UploadFailed(error),
            );
        }
    };

    log::info!("[Submit] Avatar stored at {}", object.path);
    let public_url = services.config.storage.public_url(&object.path);
    if let Some(pending) = state.pending.as_mut() {
        pending.uploaded = Some(object);
    }

    match public_url {
        Ok(url) => start_persist(state, services, url),
        Err(error) => fail_attempt(
            state,
            services,
            ProfileEditError::InvalidAvatarUrl(error.to_string()),
        ),
    }
}

/// Handle profile write completion
pub fn handle_profile_persisted(
    state: &mut ProfileEditState,
    services: &EditorServices,
    attempt: u64,
    result: Result<(), String>,
) -> Task<ProfileMessage> {
    if !is_current(state, attempt) {
        log::debug!("[Submit] Discarding persist result for stale attempt {}", attempt);
        return Task::none();
    }

    match result {
        Ok(()) => {
            if let Some(url) = state.pending.take().and_then(|p| p.avatar_url) {
                state.saved_avatar_url = Some(url.to_string());
            }
            state.form.mark_clean();
            state.phase = SubmitPhase::Navigating;
            let home = services.config.navigation.home_route.clone();
            log::info!("[Submit] Profile saved, navigating to {}", home);
            services.navigator.go_to(home);
            Task::none()
        }
        Err(error) => fail_attempt(
            state,
            services,
            ProfileEditError::PersistFailed(error),
        ),
    }
}

/// Handle orphan cleanup completion
pub fn handle_orphan_removed(
    path: String,
    result: Result<(), String>,
) -> Task<ProfileMessage> {
    match result {
        Ok(()) => log::info!("[Submit] Removed orphaned upload {}", path),
        Err(error) => {
            log::warn!("[Submit] Could not remove orphaned upload {}: {}", path, error)
        }
    }
    Task::none()
}
