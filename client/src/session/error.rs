//! Session error taxonomy.
//!
//! Errors here are user-facing: every variant renders a message that can be
//! shown inline or in a blocking alert as-is.

/// Failure from a session operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend rejected the email/password pair.
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
    /// Client-side input check failed; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// Missing, expired, or rejected bearer token.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,
    /// Transport failure or a non-success response, carrying the backend's
    /// detail when it sent one.
    #[error("{0}")]
    RequestFailed(String),
}

impl AuthError {
    /// Build a `RequestFailed` from an optional backend detail, falling back
    /// to `fallback` when the backend sent nothing usable.
    #[must_use]
    pub fn request_failed(detail: Option<String>, fallback: &str) -> Self {
        Self::RequestFailed(detail.unwrap_or_else(|| fallback.to_owned()))
    }
}
