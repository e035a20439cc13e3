//! Configuration validation module
//!
//! Field rules are kept in a fixed, ordered table so that every violation
//! is collected in one pass and reported in field declaration order.

use crate::config::Configuration;
use crate::shared::error::{Field, FieldViolation, ValidationError, ViolationKind};
use url::Url;
use validator::{ValidateLength, ValidateUrl};

/// PostgreSQL caps identifiers at 63 characters.
pub const MAX_IDENTIFIER_LENGTH: u64 = 63;

/// A single field check
struct Rule {
    field: Field,
    kind: ViolationKind,
    check: fn(&str) -> bool,
}

const RULES: &[Rule] = &[
    Rule { field: Field::Url, kind: ViolationKind::Required, check: is_set },
    Rule { field: Field::Url, kind: ViolationKind::InvalidUrl, check: is_url_or_unset },
    Rule { field: Field::Table, kind: ViolationKind::TooLong, check: is_identifier_length },
    Rule { field: Field::Key, kind: ViolationKind::TooLong, check: is_identifier_length },
];

fn is_set(value: &str) -> bool {
    !value.is_empty()
}

// An empty url is already reported as `Required`.
fn is_url_or_unset(value: &str) -> bool {
    value.is_empty() || (value.validate_url() && has_url_structure(value))
}

/// A parsed url also needs a host, a fragment or an opaque body;
/// `file` urls are accepted as-is.
fn has_url_structure(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => {
            url.scheme() == "file"
                || url.host_str().is_some_and(|host| !host.is_empty())
                || url.fragment().is_some_and(|fragment| !fragment.is_empty())
                || (url.cannot_be_a_base() && !url.path().is_empty())
        }
        Err(_) => false,
    }
}

fn is_identifier_length(value: &str) -> bool {
    value.validate_length(None, Some(MAX_IDENTIFIER_LENGTH), None)
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Run every rule against the configuration, collecting all violations
    pub fn validate(config: &Configuration) -> Result<(), ValidationError> {
        let violations = RULES
            .iter()
            .filter(|rule| !(rule.check)(config.value(rule.field)))
            .map(|rule| FieldViolation::new(rule.field, rule.kind))
            .collect();

        match ValidationError::from_violations(violations) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
