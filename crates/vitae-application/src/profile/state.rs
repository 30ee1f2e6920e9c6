//! Profile view state
//!
//! The variants make illegal combinations unrepresentable: there is no
//! editing without a loaded record, and no draft outside edit mode.

use vitae_core::user::{EditDraft, Identity, UserRecord};

/// A record that has been loaded, plus the overlay flag that applies to both
/// viewing and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProfile {
    pub record: UserRecord,
    /// Whether the image editor overlay is shown
    pub image_editor_open: bool,
}

impl LoadedProfile {
    pub fn new(record: UserRecord) -> Self {
        Self {
            record,
            image_editor_open: false,
        }
    }

    pub fn identity(&self) -> Identity {
        self.record.id
    }
}

/// Profile view state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileState {
    /// Waiting for the session provider
    #[default]
    Resolving,
    /// Nobody is signed in; the view has redirected away. Terminal.
    Unauthenticated,
    /// Record fetch in flight
    Loading { identity: Identity },
    /// Record fetch failed; shown as "user not found"
    NotFound { identity: Identity },
    /// Record shown read-only
    Viewing(LoadedProfile),
    /// Record shown with the edit form
    Editing(LoadedProfile, EditDraft),
}

impl ProfileState {
    /// Identity the view is bound to, once resolved.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            ProfileState::Resolving | ProfileState::Unauthenticated => None,
            ProfileState::Loading { identity } | ProfileState::NotFound { identity } => {
                Some(*identity)
            }
            ProfileState::Viewing(loaded) | ProfileState::Editing(loaded, _) => {
                Some(loaded.identity())
            }
        }
    }

    pub fn loaded(&self) -> Option<&LoadedProfile> {
        match self {
            ProfileState::Viewing(loaded) | ProfileState::Editing(loaded, _) => Some(loaded),
            _ => None,
        }
    }

    pub(crate) fn loaded_mut(&mut self) -> Option<&mut LoadedProfile> {
        match self {
            ProfileState::Viewing(loaded) | ProfileState::Editing(loaded, _) => Some(loaded),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&UserRecord> {
        self.loaded().map(|loaded| &loaded.record)
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            ProfileState::Editing(_, draft) => Some(draft),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ProfileState::Editing(_, _))
    }

    pub fn is_image_editor_open(&self) -> bool {
        self.loaded().is_some_and(|loaded| loaded.image_editor_open)
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ProfileState::Resolving => "Resolving",
            ProfileState::Unauthenticated => "Unauthenticated",
            ProfileState::Loading { .. } => "Loading",
            ProfileState::NotFound { .. } => "NotFound",
            ProfileState::Viewing(_) => "Viewing",
            ProfileState::Editing(_, _) => "Editing",
        }
    }
}
