use async_trait::async_trait;
use profilekit_model::{ProfileRecord, ProfileUpdate, Session, UserId};
use std::fmt::Debug;

use crate::error::StoreResult;

/// Repository trait for profile persistence
///
/// The backing store owns the records; the editor only reads one at load time
/// and writes one update per successful submit.
#[async_trait]
pub trait ProfileStore: Send + Sync + Debug {
    /// Read the profile for an identity, `None` when no record exists
    async fn read(&self, user_id: UserId) -> StoreResult<Option<ProfileRecord>>;

    /// Check whether a profile record exists for an identity
    async fn exists(&self, user_id: UserId) -> StoreResult<bool>;

    /// Write the editable columns of the caller's own profile
    async fn write(
        &self,
        session: &Session,
        update: ProfileUpdate,
    ) -> StoreResult<()>;
}
