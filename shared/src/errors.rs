//! Error types shared across the Scribe application

use thiserror::Error;

/// Authentication error types
///
/// Subtypes are distinguished for logging only; the HTTP layer collapses
/// all of them to a single 401 response.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("token could not be decoded")]
    Malformed,

    #[error("token signature mismatch")]
    BadSignature,

    #[error("token expired")]
    Expired,

    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid credentials")]
    InvalidCredentials,
}
