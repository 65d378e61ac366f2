/**
 * Backend Error Types
 *
 * One variant per failure category a request can end in. Every variant
 * carries the HTTP status and the short client-facing message; the internal
 * cause is logged where the error is raised and never reaches the client.
 *
 * # Error Categories
 *
 * - `Validation` - missing or malformed input (400)
 * - `Conflict` - duplicate unique key (409)
 * - `Auth` - missing/invalid/expired token or wrong credentials (403)
 * - `NotFound` - no matching records (404)
 * - `Dependency` - store or hashing failure (500)
 *
 * Several endpoints answer with a status other than the category default
 * to keep their historical response shape (signup conflicts are a 404, for
 * example); `with_status` covers those cases without merging categories.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error taxonomy
///
/// # Usage
///
/// ```rust
/// use roomdesk::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::conflict("Sign up failed! please try again")
///     .with_status(StatusCode::NOT_FOUND);
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Client-correctable input problem
    #[error("Validation error: {message}")]
    Validation { status: StatusCode, message: String },

    /// Unique key already taken
    #[error("Conflict: {message}")]
    Conflict { status: StatusCode, message: String },

    /// Authentication failed; deliberately generic
    #[error("Auth error: {message}")]
    Auth { status: StatusCode, message: String },

    /// Nothing matched
    #[error("Not found: {message}")]
    NotFound { status: StatusCode, message: String },

    /// Persistence or hashing subsystem failed
    #[error("Dependency error: {message}")]
    Dependency { status: StatusCode, message: String },
}

/// Category of a `BackendError`, independent of the status it renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Auth,
    NotFound,
    Dependency,
}

impl BackendError {
    /// 400 validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 409 conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    /// 403 authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
        }
    }

    /// 404 not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// 500 dependency error
    pub fn dependency(message: impl Into<String>) -> Self {
        Self::Dependency {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Render with `status` instead of the category default
    pub fn with_status(mut self, new_status: StatusCode) -> Self {
        match &mut self {
            Self::Validation { status, .. }
            | Self::Conflict { status, .. }
            | Self::Auth { status, .. }
            | Self::NotFound { status, .. }
            | Self::Dependency { status, .. } => *status = new_status,
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Dependency { .. } => ErrorKind::Dependency,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. }
            | Self::Conflict { status, .. }
            | Self::Auth { status, .. }
            | Self::NotFound { status, .. }
            | Self::Dependency { status, .. } => *status,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Conflict { message, .. }
            | Self::Auth { message, .. }
            | Self::NotFound { message, .. }
            | Self::Dependency { message, .. } => message.as_str(),
        }
    }
}
