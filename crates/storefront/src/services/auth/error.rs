//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] nextgen_core::EmailError),

    /// Invalid credentials (missing or empty password).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration rejected (missing name or password).
    #[error("registration failed")]
    RegistrationFailed,
}
