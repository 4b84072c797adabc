//! Password validator
//!
//! Evaluates every [`Rule`] against a password, without short-circuiting,
//! and collects the failures in evaluation order.

use log::debug;

use crate::core::models::{Rule, ValidationResult};

/// Validate `password` against the fixed rule set
///
/// The password is checked exactly as given: no trimming, no Unicode
/// normalization. This never fails; an empty string simply breaks every
/// rule it can.
#[must_use]
pub fn validate_password(password: &str) -> ValidationResult {
    debug!("Validating password");

    let violations: Vec<Rule> = Rule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .collect();

    let result = ValidationResult::from_violations(violations);
    debug!(
        "Validation finished: {} ({} violation(s))",
        if result.is_valid() { "valid" } else { "invalid" },
        result.violations().len()
    );
    result
}
