//! Configuration management module
//! 
//! This module handles all configuration concerns: loading raw values,
//! projecting them into the typed connector configuration and validating it.

pub mod connector_config;
pub mod validation;

pub use connector_config::{Configuration, CONFIG_KEY_KEY, CONFIG_KEY_TABLE, CONFIG_KEY_URL};
pub use validation::{ConfigValidator, MAX_IDENTIFIER_LENGTH};
