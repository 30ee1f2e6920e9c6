//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use vitae_core::config::LoggingConfig;
use vitae_core::error::{Result, VitaeError};

/// Builds the filter: `RUST_LOG` when set, else the configured level.
fn make_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global fmt subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(make_env_filter(config))
        .with_target(false)
        .try_init()
        .map_err(|e| VitaeError::internal(format!("Failed to initialize tracing: {}", e)))
}

/// Installs a test-writer subscriber once per process.
pub fn init_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(make_env_filter(&LoggingConfig::default()))
            .with_test_writer()
            .try_init();
    });
}
