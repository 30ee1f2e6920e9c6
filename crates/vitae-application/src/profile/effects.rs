//! Side effects requested by the profile view.
//!
//! [`super::ProfileView::update`] never performs I/O; it returns these and the
//! controller carries them out.

use vitae_core::user::{EditDraft, Identity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET` the record for the identity.
    FetchRecord(Identity),
    /// `PATCH` the record with the full draft.
    UpdateRecord { identity: Identity, draft: EditDraft },
    /// Navigate away, one way.
    Redirect(String),
    /// Blocking acknowledgment shown to the user.
    Alert(String),
    /// Show the external image editor for the identity.
    OpenImageEditor(Identity),
}
