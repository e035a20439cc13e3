//! Logging utilities module
//! 
//! This module provides centralized logging functionality and utilities.

use tracing::{error, info};

use crate::config::Configuration;
use crate::shared::error::{ConnectorError, ValidationError};

/// Logging utilities for the connector
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging, preferring `RUST_LOG` over the given level
    pub fn initialize(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| ConnectorError::Logging(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log a configuration that passed validation
    pub fn log_loaded(config: &Configuration) {
        let host = config
            .url_parsed()
            .ok()
            .and_then(|url| url.host_str().map(str::to_string));

        info!(
            host = ?host,
            table = %config.table,
            key = %config.key,
            "Configuration loaded successfully"
        );
    }

    /// Log a configuration rejected by validation, one event per violation
    pub fn log_rejected(err: &ValidationError) {
        for violation in err.violations() {
            error!(
                field = %violation.field,
                kind = ?violation.kind,
                "{}",
                violation
            );
        }
    }
}
