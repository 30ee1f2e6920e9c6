//! Profile view messages
//!
//! Everything that can happen to the profile view: user interactions from the
//! host, and results delivered back by the collaborators.

use vitae_core::VitaeError;
use vitae_core::avatar::EncodedImage;
use vitae_core::session::SessionStatus;
use vitae_core::user::{DraftField, EditDraft, Identity, UserRecord};

/// Messages for the profile view
#[derive(Debug, Clone)]
pub enum ProfileMessage {
    // Collaborator results
    /// The session provider published a status
    SessionChanged(SessionStatus),
    /// Result of the record fetch issued for `identity`
    RecordLoaded {
        identity: Identity,
        result: Result<UserRecord, VitaeError>,
    },
    /// Result of the partial update that submitted `draft`
    SaveFinished {
        draft: EditDraft,
        result: Result<(), VitaeError>,
    },
    /// The image editor produced a new avatar
    ImageEdited(EncodedImage),

    // User interactions
    /// Enter edit mode
    StartEdit,
    /// Change one draft field
    FieldChanged(DraftField, String),
    /// Submit the draft
    Save,
    /// Leave edit mode, discarding the draft
    Cancel,
    /// Open the image editor overlay
    OpenImageEditor,
    /// Close the image editor overlay without a new image
    DismissImageEditor,
}

impl ProfileMessage {
    /// Get a static name for logging/debugging
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionChanged(_) => "Profile::SessionChanged",
            Self::RecordLoaded { .. } => "Profile::RecordLoaded",
            Self::SaveFinished { .. } => "Profile::SaveFinished",
            Self::ImageEdited(_) => "Profile::ImageEdited",
            Self::StartEdit => "Profile::StartEdit",
            Self::FieldChanged(_, _) => "Profile::FieldChanged",
            Self::Save => "Profile::Save",
            Self::Cancel => "Profile::Cancel",
            Self::OpenImageEditor => "Profile::OpenImageEditor",
            Self::DismissImageEditor => "Profile::DismissImageEditor",
        }
    }
}
