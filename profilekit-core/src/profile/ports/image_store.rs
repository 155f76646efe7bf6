use async_trait::async_trait;
use profilekit_model::{ImageFile, UploadedObject, UserId};
use std::fmt::Debug;

use crate::error::StoreResult;

/// Object storage for avatar images
#[async_trait]
pub trait ImageStore: Send + Sync + Debug {
    /// Upload an image scoped to its owner.
    ///
    /// `Ok(None)` means the store accepted the request but produced no object
    /// reference; callers treat it as a failed upload.
    async fn upload(
        &self,
        image: ImageFile,
        owner: UserId,
    ) -> StoreResult<Option<UploadedObject>>;

    /// Delete a previously uploaded object
    async fn remove(&self, object: &UploadedObject) -> StoreResult<()>;
}
