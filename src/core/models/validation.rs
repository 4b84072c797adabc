//! Validation outcome
//!
//! A [`ValidationResult`] only stores the rules that failed. Validity is
//! derived from that list being empty, so a result can never claim to be
//! valid while carrying violations.

use super::rule::Rule;

/// Outcome of validating one password
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Rule>,
}

impl ValidationResult {
    /// Build a result from the failed rules, in evaluation order
    #[must_use]
    pub const fn from_violations(violations: Vec<Rule>) -> Self {
        Self { violations }
    }

    /// A result with no violations
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Whether the password satisfied every rule
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Failed rules, in evaluation order
    #[must_use]
    pub fn violations(&self) -> &[Rule] {
        &self.violations
    }

    /// Violation messages, in evaluation order
    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|rule| rule.message())
    }

    /// Whether `rule` is among the violations
    #[must_use]
    pub fn violates(&self, rule: Rule) -> bool {
        self.violations.contains(&rule)
    }
}
