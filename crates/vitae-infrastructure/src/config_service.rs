//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/vitae/config.toml).

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use vitae_core::config::VitaeConfig;
use vitae_core::error::{Result, VitaeError};

use crate::paths::VitaePaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the defaults. A file that exists but does not parse
/// is reported as a configuration error rather than silently replaced.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<VitaeConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading the default config path.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService for an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<VitaeConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| VitaeError::internal(format!("config cache poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_from(&self.config_path()?)?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|e| VitaeError::internal(format!("config cache poisoned: {}", e)))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Writes `config` to the service's file, creating parent directories.
    pub fn save(&self, config: &VitaeConfig) -> Result<()> {
        let path = self.config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        std::fs::write(&path, content)?;
        self.invalidate_cache();
        Ok(())
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => VitaePaths::config_file().map_err(|e| VitaeError::config(e.to_string())),
        }
    }

    fn load_from(path: &Path) -> Result<VitaeConfig> {
        if !path.exists() {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                path.display()
            );
            return Ok(VitaeConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            VitaeError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
