//! Unified error handling for the storefront core.
//!
//! Per-module errors stay close to their modules; `AppError` aggregates them
//! for embedders that want a single `?`-able type. Note that most catalog and
//! storage failures never surface here at all - they degrade to fallback or
//! empty state by design.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::storage::StorageError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Durable storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Login or registration was rejected.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
