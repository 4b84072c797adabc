//! API error types with HTTP status code mapping
//!
//! Every error carries one fixed, caller-safe message. Underlying causes are
//! logged where they happen and never copied into an `ApiError`.

/// Message for requests that are not `POST`
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed, use POST";

/// Message for a missing, empty or malformed `password` field
pub const PASSWORD_REQUIRED_MESSAGE: &str = "the password field is required";

/// Message for any unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "error processing the request";

/// Message for unknown paths
pub const NOT_FOUND_MESSAGE: &str = "endpoint not found";

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid request (400)
    BadRequest,
    /// Unknown endpoint (404)
    NotFound,
    /// Wrong HTTP method (405)
    MethodNotAllowed,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Internal => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// API error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: &'static str,
}

impl ApiError {
    /// The `password` field is missing, empty, or the body is not usable JSON
    #[must_use]
    pub const fn password_required() -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: PASSWORD_REQUIRED_MESSAGE,
        }
    }

    /// The path does not name an endpoint
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: NOT_FOUND_MESSAGE,
        }
    }

    /// The request used a method other than `POST`
    #[must_use]
    pub const fn method_not_allowed() -> Self {
        Self {
            code: ErrorCode::MethodNotAllowed,
            message: METHOD_NOT_ALLOWED_MESSAGE,
        }
    }

    /// Something unexpected failed while handling the request
    #[must_use]
    pub const fn internal() -> Self {
        Self {
            code: ErrorCode::Internal,
            message: INTERNAL_ERROR_MESSAGE,
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}
