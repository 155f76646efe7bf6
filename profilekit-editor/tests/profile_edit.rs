use std::sync::Arc;

use async_trait::async_trait;
use profilekit_config::{EditorConfig, StorageConfig};
use profilekit_core::{
    ImageStore, InMemoryImageStore, InMemoryProfileStore, ProfileField,
    RecordingNavigator, SessionProvider, SessionWatch, StoreError, StoreResult, UploadBehavior,
};
use profilekit_editor::{
    AvatarPreview, EditorServices, LoadState, ProfileEditError, ProfileEditor,
    ProfileMessage, SubmitPhase,
};
use profilekit_model::{
    AvatarRef, ImageFile, ProfileRecord, Route, Session, UploadedObject, UserId,
};
use url::Url;

const STORED_AVATAR: &str = "https://cdn.example.com/stored/avatar.png";

struct Harness {
    user: UserId,
    profiles: InMemoryProfileStore,
    images: InMemoryImageStore,
    navigator: RecordingNavigator,
    editor: ProfileEditor,
}

fn record(id: UserId, avatar_url: &str) -> ProfileRecord {
    ProfileRecord {
        id,
        name: "Alice".into(),
        handle: "al".into(),
        avatar_url: avatar_url.into(),
        bio: "hi".into(),
    }
}

fn png(name: &str) -> ImageFile {
    ImageFile::new(name, "image/png", vec![0x89, 0x50, 0x4e, 0x47])
}

/// Uploads land at `<owner>/<unique id>-<file name>`
fn assert_upload_path(path: &str, owner: UserId, file_name: &str) {
    assert!(path.starts_with(&format!("{owner}/")), "{path}");
    assert!(path.ends_with(&format!("-{file_name}")), "{path}");
}

impl Harness {
    fn with_records(user: UserId, records: Vec<ProfileRecord>) -> Self {
        let profiles = InMemoryProfileStore::with_records(records);
        let images = InMemoryImageStore::new();
        let navigator = RecordingNavigator::new();
        let editor = Self::editor_over(&profiles, &images, &navigator);
        Self {
            user,
            profiles,
            images,
            navigator,
            editor,
        }
    }

    fn editor_over(
        profiles: &InMemoryProfileStore,
        images: &InMemoryImageStore,
        navigator: &RecordingNavigator,
    ) -> ProfileEditor {
        ProfileEditor::new(EditorServices::new(
            Arc::new(profiles.clone()),
            Arc::new(images.clone()),
            Arc::new(navigator.clone()),
        ))
    }

    /// Start a fresh edit session over the same stores
    async fn reopen(&mut self) {
        self.editor =
            Self::editor_over(&self.profiles, &self.images, &self.navigator);
        let session = self.session();
        self.editor
            .dispatch(ProfileMessage::SessionChanged(Some(session)))
            .await;
        assert!(self.editor.is_loaded());
    }

    fn seeded(avatar_url: &str) -> Self {
        let user = UserId::new();
        Self::with_records(user, vec![record(user, avatar_url)])
    }

    fn session(&self) -> Session {
        Session::new(self.user, "token-1")
    }

    async fn loaded(avatar_url: &str) -> Self {
        let mut harness = Self::seeded(avatar_url);
        let session = harness.session();
        harness
            .editor
            .dispatch(ProfileMessage::SessionChanged(Some(session)))
            .await;
        assert!(harness.editor.is_loaded());
        harness
    }
}

#[tokio::test]
async fn loaded_flag_flips_only_when_load_reports() {
    let mut harness = Harness::seeded(STORED_AVATAR);
    let session = harness.session();

    let task = harness
        .editor
        .update(ProfileMessage::SessionChanged(Some(session)));

    assert!(!harness.editor.is_loaded());
    assert!(harness.editor.view().is_none());
    assert_eq!(
        harness.editor.state().load_state,
        LoadState::InProgress {
            user_id: harness.user
        }
    );

    let loaded = task.resolve().await.expect("load message");
    assert!(matches!(loaded, ProfileMessage::ProfileLoaded { .. }));
    let follow_up = harness.editor.update(loaded);

    assert!(follow_up.is_none());
    assert!(harness.editor.is_loaded());
    assert_eq!(harness.profiles.read_calls().await, 1);
    assert_eq!(harness.profiles.exists_calls().await, 1);

    let view = harness.editor.view().expect("form visible");
    assert_eq!(view.display_name, "Alice");
    assert_eq!(view.handle, "al");
    assert_eq!(view.about_me, "hi");
    assert_eq!(
        view.avatar,
        AvatarPreview::Remote(Url::parse(STORED_AVATAR).unwrap())
    );
    assert!(!view.dirty);
}

#[tokio::test]
async fn missing_profile_navigates_home_and_stays_closed() {
    let user = UserId::new();
    let mut harness = Harness::with_records(user, Vec::new());

    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(Some(Session::new(user, "t"))))
        .await;

    assert!(!harness.editor.is_loaded());
    assert!(harness.editor.view().is_none());
    assert_eq!(harness.navigator.history(), vec![Route::home()]);
    assert_eq!(
        harness.editor.state().load_state,
        LoadState::Missing { user_id: user }
    );
}

#[tokio::test]
async fn absent_session_does_nothing() {
    let mut harness = Harness::seeded(STORED_AVATAR);

    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(None))
        .await;

    assert!(!harness.editor.is_loaded());
    assert_eq!(harness.editor.state().load_state, LoadState::NotStarted);
    assert_eq!(harness.profiles.read_calls().await, 0);
    assert!(harness.navigator.history().is_empty());
}

#[tokio::test]
async fn load_failure_keeps_gate_closed() {
    let mut harness = Harness::seeded(STORED_AVATAR);
    harness
        .profiles
        .fail_reads_with(Some(StoreError::Connection("offline".into())))
        .await;
    let session = harness.session();

    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(Some(session)))
        .await;

    assert!(!harness.editor.is_loaded());
    assert!(matches!(
        harness.editor.state().last_failure,
        Some(ProfileEditError::LoadFailed(_))
    ));
    assert!(harness.navigator.history().is_empty());
}

#[tokio::test]
async fn token_refresh_does_not_reload() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    harness
        .editor
        .dispatch(ProfileMessage::UpdateAboutMe("edited".into()))
        .await;

    let refreshed = Session::new(harness.user, "token-2");
    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(Some(refreshed.clone())))
        .await;

    assert_eq!(harness.profiles.read_calls().await, 1);
    assert_eq!(harness.editor.state().session, Some(refreshed));
    assert_eq!(harness.editor.state().form.values().about_me, "edited");
}

#[tokio::test]
async fn session_provider_drives_the_gate() {
    let mut harness = Harness::seeded(STORED_AVATAR);
    let provider = SessionWatch::new(Some(harness.session()));

    harness.editor.sync_session(&provider).await;

    assert!(harness.editor.is_loaded());
}

#[tokio::test]
async fn short_display_name_blocks_submit() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;

    harness
        .editor
        .dispatch(ProfileMessage::UpdateDisplayName("A".into()))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    let view = harness.editor.view().expect("loaded");
    assert_eq!(
        view.error(ProfileField::DisplayName),
        Some("Username must be at least 2 characters.")
    );
    assert_eq!(view.phase, SubmitPhase::Idle);
    assert!(harness.profiles.writes().await.is_empty());
    assert!(harness.navigator.history().is_empty());
}

#[tokio::test]
async fn long_handle_blocks_submit() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;

    harness
        .editor
        .dispatch(ProfileMessage::UpdateHandle("alice".into()))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    let view = harness.editor.view().expect("loaded");
    assert_eq!(
        view.error(ProfileField::Handle),
        Some("Handle must be at most 4 characters.")
    );
    assert_eq!(view.error(ProfileField::DisplayName), None);
    assert_eq!(harness.images.upload_calls().await, 0);
    assert!(harness.profiles.writes().await.is_empty());
}

#[tokio::test]
async fn empty_local_avatar_fails_validation() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;

    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(ImageFile::new(
            "empty.png",
            "image/png",
            Vec::new(),
        ))))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    let view = harness.editor.view().expect("loaded");
    assert_eq!(view.error(ProfileField::Avatar), Some("Avatar must be a file."));
    assert_eq!(harness.images.upload_calls().await, 0);
}

#[tokio::test]
async fn no_file_selected_keeps_avatar() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    let before = harness.editor.state().form.values().avatar.clone();

    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(None))
        .await;

    assert_eq!(harness.editor.state().form.values().avatar, before);
    assert_eq!(
        harness.editor.state().last_failure,
        Some(ProfileEditError::NoFileSelected)
    );
    let view = harness.editor.view().expect("loaded");
    assert_eq!(view.failure.as_deref(), Some("No file selected"));
}

#[tokio::test]
async fn edits_before_load_are_ignored() {
    let mut harness = Harness::seeded(STORED_AVATAR);

    harness
        .editor
        .dispatch(ProfileMessage::UpdateDisplayName("Bob".into()))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    assert_eq!(harness.editor.state().form.values().display_name, "");
    assert_eq!(harness.editor.state().phase, SubmitPhase::Idle);
}

/// Image store that always answers with a fixed object path
#[derive(Debug, Default)]
struct FixedPathImageStore {
    path: &'static str,
    removed: tokio::sync::Mutex<Vec<String>>,
}

#[async_trait]
impl ImageStore for FixedPathImageStore {
    async fn upload(
        &self,
        _image: ImageFile,
        _owner: UserId,
    ) -> StoreResult<Option<UploadedObject>> {
        Ok(Some(UploadedObject::new(self.path)))
    }

    async fn remove(&self, object: &UploadedObject) -> StoreResult<()> {
        self.removed.lock().await.push(object.path.clone());
        Ok(())
    }
}

#[tokio::test]
async fn successful_submit_persists_public_url_and_navigates_home() {
    let user = UserId::new();
    let profiles = InMemoryProfileStore::with_records([record(user, "")]);
    let navigator = RecordingNavigator::new();
    let config = EditorConfig::default();
    let base = config.storage.public_base_url.to_string();
    let services = EditorServices::new(
        Arc::new(profiles.clone()),
        Arc::new(FixedPathImageStore {
            path: "u123/avatar.png",
            ..FixedPathImageStore::default()
        }),
        Arc::new(navigator.clone()),
    )
    .with_config(config);
    let mut editor = ProfileEditor::new(services);

    editor
        .dispatch(ProfileMessage::SessionChanged(Some(Session::new(user, "t"))))
        .await;
    assert!(editor.is_loaded());
    // record has no avatar yet, so the form starts on the placeholder
    assert_eq!(
        editor.view().expect("loaded").avatar,
        AvatarPreview::Placeholder
    );

    editor
        .dispatch(ProfileMessage::UpdateDisplayName("Alice".into()))
        .await;
    editor
        .dispatch(ProfileMessage::UpdateHandle("al".into()))
        .await;
    editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("avatar.png"))))
        .await;
    editor
        .dispatch(ProfileMessage::UpdateAboutMe("hi".into()))
        .await;
    editor.dispatch(ProfileMessage::Submit).await;

    let writes = profiles.writes().await;
    assert_eq!(writes.len(), 1);
    let (written_for, update) = &writes[0];
    assert_eq!(*written_for, user);
    assert_eq!(update.display_name, "Alice");
    assert_eq!(update.handle, "al");
    assert_eq!(update.about_me, "hi");
    assert_eq!(update.avatar_url.as_str(), format!("{base}u123/avatar.png"));

    assert_eq!(navigator.history(), vec![Route::new("/")]);
    assert_eq!(editor.state().phase, SubmitPhase::Navigating);
    assert!(editor.state().last_failure.is_none());
    assert!(!editor.state().form.is_dirty());
}

#[tokio::test]
async fn configured_base_url_and_home_route_are_used() {
    let user = UserId::new();
    let profiles = InMemoryProfileStore::with_records([record(user, STORED_AVATAR)]);
    let images = InMemoryImageStore::new();
    let navigator = RecordingNavigator::new();
    let mut config = EditorConfig::default();
    config.storage =
        StorageConfig::new(Url::parse("https://assets.example.com/avatars/").unwrap());
    config.navigation.home_route = Route::new("/feed");
    let services = EditorServices::new(
        Arc::new(profiles.clone()),
        Arc::new(images.clone()),
        Arc::new(navigator.clone()),
    )
    .with_config(config);
    let mut editor = ProfileEditor::new(services);

    editor
        .dispatch(ProfileMessage::SessionChanged(Some(Session::new(user, "t"))))
        .await;
    editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;
    editor.dispatch(ProfileMessage::Submit).await;

    let stored = profiles.record(user).await.expect("record");
    let path = stored
        .avatar_url
        .strip_prefix("https://assets.example.com/avatars/")
        .expect("configured base URL");
    assert_upload_path(path, user, "me.png");
    assert_eq!(navigator.last(), Some(Route::new("/feed")));
}

#[tokio::test]
async fn unchanged_remote_avatar_skips_upload() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;

    harness
        .editor
        .dispatch(ProfileMessage::UpdateAboutMe("new bio".into()))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    assert_eq!(harness.images.upload_calls().await, 0);
    let stored = harness.profiles.record(harness.user).await.expect("record");
    assert_eq!(stored.avatar_url, STORED_AVATAR);
    assert_eq!(stored.bio, "new bio");
    assert_eq!(harness.navigator.history(), vec![Route::home()]);
}

#[tokio::test]
async fn upload_without_object_aborts_submit() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    harness.images.set_behavior(UploadBehavior::Reject).await;

    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    assert_eq!(harness.images.upload_calls().await, 1);
    assert!(harness.profiles.writes().await.is_empty());
    assert!(harness.navigator.history().is_empty());
    assert_eq!(harness.editor.state().phase, SubmitPhase::Idle);
    assert!(matches!(
        harness.editor.state().last_failure,
        Some(ProfileEditError::UploadFailed(_))
    ));
    // the form keeps the user's edits for another try
    assert!(harness.editor.view().expect("loaded").dirty);
}

#[tokio::test]
async fn upload_error_aborts_submit() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    harness
        .images
        .set_behavior(UploadBehavior::Fail(StoreError::Storage("bucket full".into())))
        .await;

    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    assert!(harness.profiles.writes().await.is_empty());
    let failure = harness.editor.view().expect("loaded").failure;
    assert_eq!(
        failure.as_deref(),
        Some("Failed to upload image: Storage error: bucket full")
    );
}

#[tokio::test]
async fn persist_failure_is_surfaced_and_upload_removed() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    harness
        .profiles
        .fail_writes_with(Some(StoreError::Connection("timeout".into())))
        .await;

    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    assert!(matches!(
        harness.editor.state().last_failure,
        Some(ProfileEditError::PersistFailed(_))
    ));
    assert!(harness.navigator.history().is_empty());
    let removed = harness.images.removed().await;
    assert_eq!(removed.len(), 1);
    assert_upload_path(&removed[0], harness.user, "me.png");
    assert_eq!(harness.images.object_count().await, 0);
    assert!(harness.editor.state().pending.is_none());
    assert_eq!(harness.editor.state().phase, SubmitPhase::Idle);

    // no automatic retry; a second submit runs the whole pipeline again
    harness.profiles.fail_writes_with(None).await;
    harness.editor.dispatch(ProfileMessage::Submit).await;
    assert_eq!(harness.images.upload_calls().await, 2);
    assert_eq!(harness.navigator.history(), vec![Route::home()]);
}

#[tokio::test]
async fn stale_load_result_is_discarded() {
    let other = UserId::new();
    let first = UserId::new();
    let mut second_record = record(other, STORED_AVATAR);
    second_record.name = "Bob".into();
    let mut harness =
        Harness::with_records(first, vec![record(first, STORED_AVATAR), second_record]);

    let first_load = harness
        .editor
        .update(ProfileMessage::SessionChanged(Some(Session::new(first, "a"))));
    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(Some(Session::new(other, "b"))))
        .await;
    assert_eq!(harness.editor.state().form.values().display_name, "Bob");

    let late = first_load.resolve().await.expect("load message");
    let follow_up = harness.editor.update(late);

    assert!(follow_up.is_none());
    assert_eq!(
        harness.editor.state().load_state,
        LoadState::Loaded { user_id: other }
    );
    assert_eq!(harness.editor.state().form.values().display_name, "Bob");
}

#[tokio::test]
async fn teardown_drops_pending_upload_result() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;

    let upload = harness.editor.update(ProfileMessage::Submit);
    assert_eq!(harness.editor.state().phase, SubmitPhase::UploadingAvatar);
    // a second submit while one is in flight is ignored
    assert!(harness.editor.update(ProfileMessage::Submit).is_none());

    harness.editor.teardown();
    let uploaded = upload.resolve().await.expect("upload message");

    // after teardown every message is dropped, including the cleanup trigger
    assert!(harness.editor.update(uploaded).is_none());
    assert!(harness.profiles.writes().await.is_empty());
    assert!(harness.navigator.history().is_empty());
}

#[tokio::test]
async fn identity_change_mid_submit_removes_stale_upload() {
    let first = UserId::new();
    let other = UserId::new();
    let mut harness = Harness::with_records(
        first,
        vec![record(first, STORED_AVATAR), record(other, STORED_AVATAR)],
    );
    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(Some(Session::new(first, "a"))))
        .await;
    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;

    let upload = harness.editor.update(ProfileMessage::Submit);
    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(Some(Session::new(other, "b"))))
        .await;

    let uploaded = upload.resolve().await.expect("upload message");
    harness.editor.dispatch(uploaded).await;

    assert!(harness.profiles.writes().await.is_empty());
    let removed = harness.images.removed().await;
    assert_eq!(removed.len(), 1);
    assert_upload_path(&removed[0], first, "me.png");
    assert_eq!(harness.editor.state().phase, SubmitPhase::Idle);
}

#[tokio::test]
async fn submit_without_session_is_ignored() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;

    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(None))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    assert!(harness.editor.is_loaded());
    assert!(harness.editor.state().session.is_none());
    assert!(harness.profiles.writes().await.is_empty());
}

#[tokio::test]
async fn local_avatar_preview_after_pick() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;

    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;

    let view = harness.editor.view().expect("loaded");
    assert_eq!(
        view.avatar,
        AvatarPreview::Local {
            file_name: "me.png".into(),
            size: 4
        }
    );
    assert!(matches!(
        harness.editor.state().form.values().avatar,
        AvatarRef::Local(_)
    ));
}

#[tokio::test]
async fn session_lost_during_upload_fails_and_removes_upload() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;

    let upload = harness.editor.update(ProfileMessage::Submit);
    harness
        .editor
        .dispatch(ProfileMessage::SessionChanged(None))
        .await;
    let uploaded = upload.resolve().await.expect("upload message");
    harness.editor.dispatch(uploaded).await;

    let state = harness.editor.state();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.last_failure, Some(ProfileEditError::SessionLost));
    assert!(state.pending.is_none());
    assert!(harness.profiles.writes().await.is_empty());
    assert_eq!(harness.images.object_count().await, 0);
    assert_eq!(harness.images.removed().await.len(), 1);
    assert!(harness.navigator.history().is_empty());
}

#[tokio::test]
async fn failed_persist_keeps_the_saved_avatar_object() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    let base = EditorConfig::default().storage.public_base_url.to_string();

    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;
    let saved = harness.profiles.record(harness.user).await.expect("record");
    let saved_path = saved
        .avatar_url
        .strip_prefix(base.as_str())
        .expect("public URL")
        .to_string();
    assert!(harness.images.object(&saved_path).await.is_some());

    // next session re-picks a file with the same name, then the write fails
    harness.reopen().await;
    harness
        .profiles
        .fail_writes_with(Some(StoreError::Connection("timeout".into())))
        .await;
    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;

    let record = harness.profiles.record(harness.user).await.expect("record");
    assert_eq!(record.avatar_url, saved.avatar_url);
    assert!(harness.images.object(&saved_path).await.is_some());
    let removed = harness.images.removed().await;
    assert_eq!(removed.len(), 1);
    assert_ne!(removed[0], saved_path);
}

#[tokio::test]
async fn cleanup_skips_the_object_the_saved_profile_uses() {
    let user = UserId::new();
    let config = EditorConfig::default();
    let saved_url = config.storage.public_url("u123/avatar.png").unwrap();
    let profiles =
        InMemoryProfileStore::with_records([record(user, saved_url.as_str())]);
    profiles
        .fail_writes_with(Some(StoreError::Connection("timeout".into())))
        .await;
    let images = Arc::new(FixedPathImageStore {
        path: "u123/avatar.png",
        ..FixedPathImageStore::default()
    });
    let services = EditorServices::new(
        Arc::new(profiles.clone()),
        images.clone(),
        Arc::new(RecordingNavigator::new()),
    )
    .with_config(config);
    let mut editor = ProfileEditor::new(services);

    editor
        .dispatch(ProfileMessage::SessionChanged(Some(Session::new(user, "t"))))
        .await;
    editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("avatar.png"))))
        .await;
    editor.dispatch(ProfileMessage::Submit).await;

    assert!(matches!(
        editor.state().last_failure,
        Some(ProfileEditError::PersistFailed(_))
    ));
    assert!(images.removed.lock().await.is_empty());
}

#[tokio::test]
async fn submit_after_save_is_ignored() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;
    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;
    harness.editor.dispatch(ProfileMessage::Submit).await;
    assert_eq!(harness.editor.state().phase, SubmitPhase::Navigating);

    let task = harness.editor.update(ProfileMessage::Submit);

    assert!(task.is_none());
    assert_eq!(harness.editor.state().phase, SubmitPhase::Navigating);
    assert_eq!(harness.images.upload_calls().await, 1);
    assert_eq!(harness.profiles.writes().await.len(), 1);
    assert_eq!(harness.navigator.history(), vec![Route::home()]);
}

#[tokio::test]
async fn picking_a_file_clears_no_file_selected() {
    let mut harness = Harness::loaded(STORED_AVATAR).await;

    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(None))
        .await;
    harness
        .editor
        .dispatch(ProfileMessage::AvatarSelected(Some(png("me.png"))))
        .await;

    assert!(harness.editor.state().last_failure.is_none());
    assert!(harness.editor.view().expect("loaded").failure.is_none());
}

/// Let spawned editor work run on the current-thread test runtime
async fn settle() {
    for _ in 0..64 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn followed_sessions_reload_only_on_identity_change() {
    let first = UserId::new();
    let other = UserId::new();
    let mut other_record = record(other, STORED_AVATAR);
    other_record.name = "Bob".into();
    let Harness {
        profiles,
        mut editor,
        ..
    } = Harness::with_records(
        first,
        vec![record(first, STORED_AVATAR), other_record],
    );
    let provider = SessionWatch::new(Some(Session::new(first, "t1")));
    let sessions = provider.subscribe();

    let provider_side = async {
        settle().await;
        assert_eq!(profiles.read_calls().await, 1);

        provider.set(Some(Session::new(first, "t2")));
        settle().await;
        assert_eq!(profiles.read_calls().await, 1);

        provider.set(Some(Session::new(other, "t3")));
        settle().await;
        assert_eq!(profiles.read_calls().await, 2);

        drop(provider);
    };
    // returns only once the sender is gone
    tokio::join!(editor.follow_sessions(sessions), provider_side);

    assert_eq!(
        editor.state().load_state,
        LoadState::Loaded { user_id: other }
    );
    assert_eq!(editor.state().form.values().display_name, "Bob");
    assert_eq!(
        editor
            .state()
            .session
            .as_ref()
            .map(|session| session.access_token.as_str()),
        Some("t3")
    );
}
