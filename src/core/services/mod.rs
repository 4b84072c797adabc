//! Business logic services
//!
//! Pure logic that operates on domain models. Nothing here performs I/O
//! beyond diagnostic logging.
//!
//! - [`validator`] - Check a password against the composition rules

pub mod validator;

pub use validator::validate_password;
