//! Pure API handlers
//!
//! These handlers contain the request logic and are HTTP-agnostic.
//! They take typed or raw input and return `Result<T, ApiError>`.

use log::debug;

use super::error::ApiError;
use super::types::{ValidatePasswordRequest, ValidationResponse};
use crate::core::services;

/// Parse a raw request body
///
/// A body that is not JSON, is not an object, or carries a non-string
/// `password` is treated the same as a missing field.
pub fn parse_validate_request(body: &str) -> Result<ValidatePasswordRequest, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        debug!("Rejecting request body: {e}");
        ApiError::password_required()
    })
}

/// Validate the password carried by a request
///
/// Rule failures are a successful outcome; only a missing or empty
/// `password` is an error.
pub fn validate_password(req: &ValidatePasswordRequest) -> Result<ValidationResponse, ApiError> {
    let password = match req.password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ApiError::password_required()),
    };

    let result = services::validate_password(password);
    Ok(ValidationResponse::from(&result))
}

/// Parse a raw body and validate it in one step
pub fn validate_body(body: &str) -> Result<ValidationResponse, ApiError> {
    let req = parse_validate_request(body)?;
    validate_password(&req)
}
