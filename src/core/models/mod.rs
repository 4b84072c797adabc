//! Domain models for passcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rule`] - One fixed composition rule and its message
//! - [`ValidationResult`] - The ordered list of failed rules

mod rule;
mod validation;

pub use rule::{MIN_LENGTH, Rule, SYMBOLS, is_symbol};
pub use validation::ValidationResult;
