//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure handlers
//! that any HTTP server implementation can call, as can the CLI.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{
    ApiError, ErrorCode, INTERNAL_ERROR_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE,
    PASSWORD_REQUIRED_MESSAGE,
};
pub use handlers::{parse_validate_request, validate_body, validate_password};
pub use types::{ValidatePasswordRequest, ValidationResponse};
