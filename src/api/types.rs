//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::core::models::ValidationResult;

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for the validation endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ValidatePasswordRequest {
    /// Candidate password (absent and `null` are both `None`)
    #[serde(default)]
    pub password: Option<String>,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// Response body shared by every JSON reply
///
/// Valid passwords serialize as `{"valid":true}`. Rule failures and errors
/// both serialize as `{"valid":false,"errors":[...]}` so callers can render
/// any non-success outcome the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the password passed every rule
    pub valid: bool,
    /// Violation or error messages (absent when valid)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationResponse {
    /// Response for a failed request, carrying the error's single message
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        Self {
            valid: false,
            errors: Some(vec![error.message.to_string()]),
        }
    }

    /// Messages to display, empty when valid
    #[must_use]
    pub fn messages(&self) -> &[String] {
        self.errors.as_deref().unwrap_or_default()
    }
}

impl From<&ValidationResult> for ValidationResponse {
    fn from(result: &ValidationResult) -> Self {
        if result.is_valid() {
            Self {
                valid: true,
                errors: None,
            }
        } else {
            Self {
                valid: false,
                errors: Some(result.messages().map(String::from).collect()),
            }
        }
    }
}
