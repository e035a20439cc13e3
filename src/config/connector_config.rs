//! Connector configuration structures
//!
//! This module contains the typed configuration for the Materialize sink
//! connector and the ways of building it from loosely typed input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

use crate::config::ConfigValidator;
use crate::shared::error::{Field, ValidationError};

/// Config key for the connection URL
pub const CONFIG_KEY_URL: &str = "url";
/// Config key for the target table
pub const CONFIG_KEY_TABLE: &str = "table";
/// Config key for the key column
pub const CONFIG_KEY_KEY: &str = "key";

/// Environment variable prefix used by [`Configuration::load`]
pub const ENV_PREFIX: &str = "MATERIALIZE";
/// Optional file name (without extension) used by [`Configuration::load`]
pub const CONFIG_FILE: &str = "materialize";

/// Configuration needed for Materialize
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Connection URL
    pub url: String,

    /// Target table name
    pub table: String,

    /// Key column name
    pub key: String,
}

impl Configuration {
    /// Parse a raw key/value mapping into a validated configuration.
    ///
    /// Missing keys are read as empty strings and unknown keys are ignored.
    pub fn parse(raw: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let read = |key: &str| {
            raw.get(key)
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };

        let config = Self {
            url: read(CONFIG_KEY_URL),
            table: read(CONFIG_KEY_TABLE),
            key: read(CONFIG_KEY_KEY),
        };

        match config.validate() {
            Ok(()) => {
                tracing::debug!(table = %config.table, key = %config.key, "Configuration parsed");
                Ok(config)
            }
            Err(e) => {
                tracing::warn!(
                    violations = e.violations().len(),
                    error = %e,
                    "Configuration validation failed"
                );
                Err(e)
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        ConfigValidator::validate(self)
    }

    /// Load configuration from an optional file and environment variables
    pub fn load() -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX));

        Self::from_sources(builder)
    }

    /// Build and parse configuration from caller-supplied sources
    pub fn from_sources(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> crate::Result<Self> {
        let raw: HashMap<String, String> = builder
            .build()
            .map_err(|e| crate::ConnectorError::Config(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| crate::ConnectorError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        Ok(Self::parse(&raw)?)
    }

    /// Value of a single field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::Table => &self.table,
            Field::Key => &self.key,
        }
    }

    /// Parsed connection URL
    pub fn url_parsed(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }
}
