//! Profile view
//!
//! Displays and edits the signed-in user's record:
//! - identity resolution through the session provider
//! - record fetch, view and edit modes, partial-update submission
//! - avatar replacement through the external image editor overlay

pub mod controller;
pub mod effects;
pub mod format;
pub mod messages;
pub mod render;
pub mod state;
pub mod update;

pub use controller::{ProfileController, ProfileDependencies};
pub use effects::Effect;
pub use messages::ProfileMessage;
pub use render::ProfileScreen;
pub use state::{LoadedProfile, ProfileState};
pub use update::ProfileView;
