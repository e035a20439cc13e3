//! Error handling module
//!
//! This module provides centralized error handling for the connector
//! configuration: the per-field violations found by the validator and the
//! crate-level error that wraps them.

use std::fmt;
use thiserror::Error;

/// Configuration fields, in the order violations are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Url,
    Table,
    Key,
}

impl Field {
    /// Lower-case name used both as the raw config key and in messages
    pub fn name(&self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Table => "table",
            Field::Key => "key",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of rule a field value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    Required,
    InvalidUrl,
    TooLong,
}

impl ViolationKind {
    pub fn reason(&self) -> &'static str {
        match self {
            ViolationKind::Required => "must be set",
            ViolationKind::InvalidUrl => "must be a valid url",
            ViolationKind::TooLong => "is too long",
        }
    }
}

/// A single failed rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} config value {}", .kind.reason())]
pub struct FieldViolation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: Field, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

/// Every rule violation found in one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Returns `None` when there is nothing to report.
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Check whether a specific field failed a specific rule
    pub fn has(&self, field: Field, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.kind == kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Connector configuration error types
#[derive(Error, Debug, Clone)]
pub enum ConnectorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Connector result type
pub type ConnectorResult<T> = Result<T, ConnectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_message() {
        let violation = FieldViolation::new(Field::Url, ViolationKind::Required);
        assert_eq!(violation.to_string(), "url config value must be set");

        let violation = FieldViolation::new(Field::Key, ViolationKind::TooLong);
        assert_eq!(violation.to_string(), "key config value is too long");
    }

    #[test]
    fn test_empty_violations_is_not_an_error() {
        assert!(ValidationError::from_violations(vec![]).is_none());
    }

    #[test]
    fn test_aggregate_message_keeps_order() {
        let err = ValidationError::from_violations(vec![
            FieldViolation::new(Field::Url, ViolationKind::InvalidUrl),
            FieldViolation::new(Field::Table, ViolationKind::TooLong),
        ])
        .unwrap();

        assert_eq!(
            err.to_string(),
            "url config value must be a valid url; table config value is too long"
        );
        assert!(err.has(Field::Table, ViolationKind::TooLong));
        assert!(!err.has(Field::Key, ViolationKind::TooLong));
    }

    #[test]
    fn test_validation_error_passes_through_connector_error() {
        let err = ValidationError::from_violations(vec![FieldViolation::new(
            Field::Url,
            ViolationKind::Required,
        )])
        .unwrap();

        let err: ConnectorError = err.into();
        assert_eq!(err.to_string(), "url config value must be set");
    }
}
