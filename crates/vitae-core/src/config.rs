//! Configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::GENERIC_SAVE_FAILURE;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_RECORD_PATH: &str = "/api/usuario";
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_SAVE_SUCCESS: &str = "Perfil atualizado com sucesso!";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VitaeConfig {
    pub service: ServiceConfig,
    pub view: ViewConfig,
    pub logging: LoggingConfig,
}

/// Where the user record endpoint lives.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub record_path: String,
    /// Request timeout. Absent means requests may wait forever.
    pub timeout_secs: Option<u64>,
}

impl ServiceConfig {
    /// Absolute URL of the record endpoint.
    pub fn record_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.record_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            record_path: DEFAULT_RECORD_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

/// Presentation settings of the profile view.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Route the view redirects to when nobody is signed in.
    pub login_route: String,
    /// chrono format string for calendar dates.
    pub date_format: String,
    pub save_success_message: String,
    pub save_failure_message: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            save_success_message: DEFAULT_SAVE_SUCCESS.to_string(),
            save_failure_message: GENERIC_SAVE_FAILURE.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: VitaeConfig = toml::from_str("").unwrap();
        assert_eq!(config, VitaeConfig::default());
        assert_eq!(config.view.login_route, "/login");
        assert_eq!(config.service.timeout(), None);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: VitaeConfig = toml::from_str(
            r#"
            [service]
            base_url = "https://perfil.example.org/"
            timeout_secs = 5

            [view]
            date_format = "%Y-%m-%d"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.service.record_url(),
            "https://perfil.example.org/api/usuario"
        );
        assert_eq!(config.service.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.view.date_format, "%Y-%m-%d");
        assert_eq!(config.view.login_route, DEFAULT_LOGIN_ROUTE);
        assert_eq!(config.logging.level, "info");
    }
}
