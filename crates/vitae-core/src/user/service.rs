//! Port to the remote user record endpoint.

use async_trait::async_trait;

use super::draft::EditDraft;
use super::model::{Identity, UserRecord};
use crate::avatar::EncodedImage;
use crate::error::Result;

/// Read and partial-update access to user records, keyed by identity.
///
/// Implementations talk to the backend; the profile view only sees this
/// trait so it can be exercised with in-memory doubles.
#[async_trait]
pub trait UserRecordService: Send + Sync {
    /// Fetches the full record for `identity`.
    ///
    /// Any non-success status or transport failure is an error; callers treat
    /// every error the same way.
    async fn fetch_record(&self, identity: Identity) -> Result<UserRecord>;

    /// Submits the editable fields of `draft` as a partial update.
    ///
    /// On error the server-provided message, if any, is carried in
    /// [`crate::VitaeError::Http`].
    async fn update_record(&self, identity: Identity, draft: &EditDraft) -> Result<()>;

    /// Persists a new avatar for `identity`.
    ///
    /// Used by image editors; the profile view never calls this itself.
    async fn upload_avatar(&self, identity: Identity, avatar: &EncodedImage) -> Result<()>;
}
