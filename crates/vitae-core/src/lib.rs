pub mod avatar;
pub mod config;
pub mod error;
pub mod session;
pub mod shell;
pub mod user;

// Re-export common error type
pub use error::VitaeError;
