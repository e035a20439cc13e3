//! Materialize connector configuration
//! 
//! This library parses the raw key/value settings handed to the Materialize
//! sink connector into a typed configuration, reporting every invalid field
//! in a single error.

pub mod config;
pub mod shared;

pub use config::{ConfigValidator, Configuration};
pub use shared::error::{ConnectorError, ConnectorResult, Field, FieldViolation, ValidationError, ViolationKind};

/// Crate result type
pub type Result<T> = std::result::Result<T, shared::error::ConnectorError>;
