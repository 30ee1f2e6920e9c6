//! Unified path management for vitae configuration files.
//!
//! ```text
//! ~/.config/vitae/             # Config directory (platform config dir)
//! └── config.toml              # Application configuration
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

const APP_DIR: &str = "vitae";

/// Unified path management for vitae.
pub struct VitaePaths;

impl VitaePaths {
    /// Returns the vitae configuration directory (e.g. `~/.config/vitae/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_inside_config_dir() {
        if let (Ok(dir), Ok(file)) = (VitaePaths::config_dir(), VitaePaths::config_file()) {
            assert!(file.starts_with(&dir));
            assert!(file.ends_with("vitae/config.toml"));
        }
    }
}
