//! Profile editor state
//!
//! Everything the editor knows about one edit session: the held session,
//! the load gate, the form, and the submit pipeline's progress.

use profilekit_core::ValidatedProfile;
use profilekit_model::{Session, UploadedObject, UserId};
use url::Url;

use crate::errors::ProfileEditError;
use crate::form::ProfileForm;

/// Progress of the initial profile load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No identity has triggered a load yet
    #[default]
    NotStarted,
    /// Read and existence check in flight for `user_id`
    InProgress { user_id: UserId },
    /// Draft seeded and record confirmed; the form may render
    Loaded { user_id: UserId },
    /// No record exists for `user_id`; the user was sent home
    Missing { user_id: UserId },
    /// Read or existence check errored
    Failed { user_id: UserId, last_error: String },
}

impl LoadState {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            LoadState::NotStarted => None,
            LoadState::InProgress { user_id }
            | LoadState::Loaded { user_id }
            | LoadState::Missing { user_id }
            | LoadState::Failed { user_id, .. } => Some(*user_id),
        }
    }
}

/// Submit pipeline position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    UploadingAvatar,
    PersistingProfile,
    Navigating,
}

impl SubmitPhase {
    pub fn in_flight(&self) -> bool {
        matches!(
            self,
            SubmitPhase::Validating
                | SubmitPhase::UploadingAvatar
                | SubmitPhase::PersistingProfile
        )
    }
}

/// Data carried across the steps of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub attempt: u64,
    pub profile: ValidatedProfile,
    /// Object created by this attempt's upload, if any
    pub uploaded: Option<UploadedObject>,
    /// URL being written, set once the persist step starts
    pub avatar_url: Option<Url>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileEditState {
    pub session: Option<Session>,
    pub load_state: LoadState,
    pub form: ProfileForm,
    /// Avatar URL the stored record currently points at; its object must
    /// never be removed as an orphan
    pub saved_avatar_url: Option<String>,
    pub phase: SubmitPhase,
    /// Monotonic submit counter; completions for older attempts are dropped
    pub attempt: u64,
    pub pending: Option<PendingSubmit>,
    /// Error message from last operation
    pub last_failure: Option<ProfileEditError>,
    /// Set by teardown; every later message is discarded
    pub torn_down: bool,
}

impl ProfileEditState {
    /// The loaded flag: true only once the draft has been seeded from the
    /// store and the record's existence confirmed.
    pub fn is_loaded(&self) -> bool {
        matches!(self.load_state, LoadState::Loaded { .. })
    }

    pub fn current_user(&self) -> Option<UserId> {
        self.session.as_ref().map(|session| session.user_id)
    }

    /// Drop any submit in flight so its completions are ignored
    pub fn abandon_submit(&mut self) {
        self.attempt += 1;
        self.pending = None;
        self.phase = SubmitPhase::Idle;
    }
}
