//! Property-based tests for the validator
//!
//! Uses proptest to verify properties that should hold for all inputs.

use passcheck::core::models::{Rule, SYMBOLS, is_symbol};
use passcheck::core::services::validate_password;
use proptest::prelude::*;

/// Printable ASCII plus a few multi-byte characters
fn password() -> impl Strategy<Value = String> {
    "[ -~éÉ€😀]{0,24}"
}

proptest! {
    /// Length violation appears exactly when the password is short
    #[test]
    fn length_rule_matches_length(pw in password()) {
        let short = pw.encode_utf16().count() < 8;
        prop_assert_eq!(validate_password(&pw).violates(Rule::MinLength), short);
    }

    /// Uppercase violation appears exactly when there is no A-Z
    #[test]
    fn uppercase_rule_matches_content(pw in password()) {
        let missing = !pw.chars().any(|c| c.is_ascii_uppercase());
        prop_assert_eq!(validate_password(&pw).violates(Rule::Uppercase), missing);
    }

    /// Digit violation appears exactly when there is no 0-9
    #[test]
    fn digit_rule_matches_content(pw in password()) {
        let missing = !pw.chars().any(|c| c.is_ascii_digit());
        prop_assert_eq!(validate_password(&pw).violates(Rule::Digit), missing);
    }

    /// Symbol violation appears exactly when no listed symbol is present
    #[test]
    fn symbol_rule_matches_content(pw in password()) {
        let missing = !pw.chars().any(|c| SYMBOLS.contains(c));
        prop_assert_eq!(validate_password(&pw).violates(Rule::Symbol), missing);
    }

    /// Valid exactly when there are no violations, and stable across calls
    #[test]
    fn valid_iff_no_violations(pw in password()) {
        let first = validate_password(&pw);
        prop_assert_eq!(first.is_valid(), first.violations().is_empty());
        prop_assert_eq!(first, validate_password(&pw));
    }

    /// Violations always come out in rule order
    #[test]
    fn violations_follow_rule_order(pw in password()) {
        let result = validate_password(&pw);
        let expected: Vec<Rule> = Rule::ALL
            .into_iter()
            .filter(|rule| result.violates(*rule))
            .collect();
        prop_assert_eq!(result.violations(), expected.as_slice());
    }

    /// Adding a listed symbol never introduces a violation
    #[test]
    fn appending_symbol_only_removes_violations(
        pw in password(),
        idx in 0..SYMBOLS.len()
    ) {
        let symbol = SYMBOLS.as_bytes()[idx] as char;
        prop_assume!(is_symbol(symbol));
        let before = validate_password(&pw);
        let after = validate_password(&format!("{pw}{symbol}"));
        prop_assert!(!after.violates(Rule::Symbol));
        for rule in after.violations() {
            prop_assert!(before.violates(*rule));
        }
    }
}
