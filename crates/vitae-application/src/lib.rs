//! Application layer for Vitae.
//!
//! This crate provides the profile view: a message-driven state machine over
//! the domain model, its renderer, and the controller that executes the
//! view's effects against the collaborator ports.

pub mod profile;

pub use profile::{
    Effect, ProfileController, ProfileDependencies, ProfileMessage, ProfileScreen, ProfileState,
    ProfileView,
};
