//! User domain module.
//!
//! This module contains the user record model, the editable draft, and the
//! record service port.
//!
//! # Module Structure
//!
//! - `model`: UserRecord and its owned collections
//! - `draft`: EditDraft, the editable subset used while editing
//! - `service`: UserRecordService trait
//!
//! # Usage
//!
//! ```ignore
//! use vitae_core::user::{UserRecord, EditDraft, UserRecordService};
//! ```

mod draft;
mod model;
mod service;

// Re-export public API
pub use draft::{DraftField, EditDraft};
pub use model::{
    ACADEMIC_CATEGORY, AcademicTitle, AccountKind, CareerEntry, Identity, LinkEntry,
    PublicationEntry, TitleValue, UserRecord,
};
pub use service::UserRecordService;
