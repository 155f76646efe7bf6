use async_trait::async_trait;
use parking_lot::Mutex;
use profilekit_model::{
    ImageFile, ProfileRecord, ProfileUpdate, Route, Session, UploadedObject,
    UserId,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::profile::ports::{ImageStore, Navigator, ProfileStore};

#[derive(Debug, Default)]
struct ProfileStoreState {
    records: HashMap<UserId, ProfileRecord>,
    writes: Vec<(UserId, ProfileUpdate)>,
    read_failure: Option<StoreError>,
    write_failure: Option<StoreError>,
    read_calls: usize,
    exists_calls: usize,
}

/// Profile store kept in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    // In-memory store for now; a network-backed adapter implements the same
    // port in the host application
    inner: Arc<RwLock<ProfileStoreState>>,
}

impl InMemoryProfileStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `records`, keyed by their ids
    pub fn with_records(records: impl IntoIterator<Item = ProfileRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(ProfileStoreState {
                records,
                ..ProfileStoreState::default()
            })),
        }
    }

    /// Add or replace a record without counting it as a write
    pub async fn insert(&self, record: ProfileRecord) {
        self.inner.write().await.records.insert(record.id, record);
    }

    /// Current stored copy of a user's record
    pub async fn record(&self, user_id: UserId) -> Option<ProfileRecord> {
        self.inner.read().await.records.get(&user_id).cloned()
    }

    /// Every successful write, oldest first
    pub async fn writes(&self) -> Vec<(UserId, ProfileUpdate)> {
        self.inner.read().await.writes.clone()
    }

    /// Make `read` and `exists` fail until cleared with `None`
    pub async fn fail_reads_with(&self, error: Option<StoreError>) {
        self.inner.write().await.read_failure = error;
    }

    /// Make `write` fail until cleared with `None`
    pub async fn fail_writes_with(&self, error: Option<StoreError>) {
        self.inner.write().await.write_failure = error;
    }

    /// Number of `read` calls seen, failed ones included
    pub async fn read_calls(&self) -> usize {
        self.inner.read().await.read_calls
    }

    /// Number of `exists` calls seen
    pub async fn exists_calls(&self) -> usize {
        self.inner.read().await.exists_calls
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn read(&self, user_id: UserId) -> StoreResult<Option<ProfileRecord>> {
        let mut state = self.inner.write().await;
        state.read_calls += 1;
        if let Some(err) = state.read_failure.clone() {
            return Err(err);
        }
        Ok(state.records.get(&user_id).cloned())
    }

    async fn exists(&self, user_id: UserId) -> StoreResult<bool> {
        let mut state = self.inner.write().await;
        state.exists_calls += 1;
        if let Some(err) = state.read_failure.clone() {
            return Err(err);
        }
        Ok(state.records.contains_key(&user_id))
    }

    async fn write(
        &self,
        session: &Session,
        update: ProfileUpdate,
    ) -> StoreResult<()> {
        let mut state = self.inner.write().await;
        if let Some(err) = state.write_failure.clone() {
            warn!(user_id = %session.user_id, "profile write rejected: {err}");
            return Err(err);
        }
        if session.access_token.trim().is_empty() {
            return Err(StoreError::Unauthorized(
                "missing access token".to_string(),
            ));
        }

        let record = state
            .records
            .get_mut(&session.user_id)
            .ok_or(StoreError::NotFound)?;
        update.apply_to(record);
        state.writes.push((session.user_id, update));

        info!(user_id = %session.user_id, "profile updated");
        Ok(())
    }
}

/// How [`InMemoryImageStore::upload`] answers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadBehavior {
    /// Store the image and return its path
    #[default]
    Accept,
    /// Answer without an object reference
    Reject,
    /// Fail with the given error
    Fail(StoreError),
}

#[derive(Debug, Default)]
struct ImageStoreState {
    objects: HashMap<String, ImageFile>,
    behavior: UploadBehavior,
    upload_calls: usize,
    removed: Vec<String>,
}

/// Object store kept in process memory. Objects are keyed
/// `<owner>/<uuid v7>-<file name>`; every upload gets a fresh object and
/// never overwrites one a profile may still reference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageStore {
    inner: Arc<RwLock<ImageStoreState>>,
}

impl InMemoryImageStore {
    const FALLBACK_NAME: &'static str = "avatar";

    /// Empty store that accepts uploads
    pub fn new() -> Self {
        Self::default()
    }

    /// Change how later uploads are answered
    pub async fn set_behavior(&self, behavior: UploadBehavior) {
        self.inner.write().await.behavior = behavior;
    }

    /// Stored image at `path`, if it was not removed
    pub async fn object(&self, path: &str) -> Option<ImageFile> {
        self.inner.read().await.objects.get(path).cloned()
    }

    /// Number of objects currently stored
    pub async fn object_count(&self) -> usize {
        self.inner.read().await.objects.len()
    }

    /// Number of `upload` calls seen, whatever the behavior
    pub async fn upload_calls(&self) -> usize {
        self.inner.read().await.upload_calls
    }

    /// Paths passed to `remove`, oldest first
    pub async fn removed(&self) -> Vec<String> {
        self.inner.read().await.removed.clone()
    }

    fn object_path(owner: UserId, image: &ImageFile) -> String {
        let name = image
            .file_name
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(Self::FALLBACK_NAME);
        format!("{owner}/{}-{name}", Uuid::now_v7())
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn upload(
        &self,
        image: ImageFile,
        owner: UserId,
    ) -> StoreResult<Option<UploadedObject>> {
        let mut state = self.inner.write().await;
        state.upload_calls += 1;

        match state.behavior.clone() {
            UploadBehavior::Accept => {
                let path = Self::object_path(owner, &image);
                debug!(%path, bytes = image.len(), "stored avatar object");
                state.objects.insert(path.clone(), image);
                Ok(Some(UploadedObject::new(path)))
            }
            UploadBehavior::Reject => Ok(None),
            UploadBehavior::Fail(err) => Err(err),
        }
    }

    async fn remove(&self, object: &UploadedObject) -> StoreResult<()> {
        let mut state = self.inner.write().await;
        state.removed.push(object.path.clone());
        if state.objects.remove(&object.path).is_none() {
            return Err(StoreError::Storage(format!(
                "no object at {}",
                object.path
            )));
        }
        Ok(())
    }
}

/// Navigator that records every requested route
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    /// Navigator with an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route requested, oldest first
    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }

    /// Most recent route
    pub fn last(&self) -> Option<Route> {
        self.history.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        debug!(%route, "navigate");
        self.history.lock().push(route);
    }
}
