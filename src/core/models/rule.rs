//! Password composition rules
//!
//! The rule set is fixed at build time. Rules are evaluated in the order
//! given by [`Rule::ALL`], and that order is the order violations are
//! reported in.

/// Minimum password length, in UTF-16 code units
pub const MIN_LENGTH: usize = 8;

/// Characters accepted by the [`Rule::Symbol`] rule
pub const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// A single composition rule a password must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// At least [`MIN_LENGTH`] code units long
    MinLength,
    /// Contains an ASCII uppercase letter
    Uppercase,
    /// Contains an ASCII digit
    Digit,
    /// Contains one of [`SYMBOLS`]
    Symbol,
}

impl Rule {
    /// Every rule, in evaluation order
    pub const ALL: [Self; 4] = [Self::MinLength, Self::Uppercase, Self::Digit, Self::Symbol];

    /// The fixed violation message reported when this rule fails
    ///
    /// The symbol message lists the set without the backslash, although a
    /// backslash does satisfy the rule.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MinLength => "password must be at least 8 characters",
            Self::Uppercase => "password must contain at least one uppercase letter",
            Self::Digit => "password must contain at least one digit",
            Self::Symbol => {
                r#"password must contain at least one special symbol from the set (!@#$%^&*()_+-=[]{};':"|,.<>/?)"#
            },
        }
    }

    /// Whether `password` satisfies this rule
    ///
    /// Length counts UTF-16 code units, so a character outside the Basic
    /// Multilingual Plane counts as two. Letter and digit classes are
    /// ASCII-only.
    #[must_use]
    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.encode_utf16().count() >= MIN_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Symbol => password.chars().any(is_symbol),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinLength => write!(f, "min_length"),
            Self::Uppercase => write!(f, "uppercase"),
            Self::Digit => write!(f, "digit"),
            Self::Symbol => write!(f, "symbol"),
        }
    }
}

/// Whether `c` belongs to [`SYMBOLS`]
#[must_use]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}
