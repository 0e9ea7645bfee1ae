//! Simulated authentication.
//!
//! There is no real identity backend; [`AuthBackend`] is the port a real one
//! would fill, and [`SimulatedBackend`] stands in by answering after a fixed
//! delay. [`AuthSession`] holds the signed-in user and mirrors it to durable
//! storage under a single key, the same way the cart persists its lines.

mod error;

pub use error::AuthError;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use nextgen_core::{Email, UserId};

use crate::storage::StorageBackend;

/// Storage key holding the serialized signed-in user.
pub(crate) const USER_STORAGE_KEY: &str = "nextgen-user";

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

/// External authentication service port.
pub trait AuthBackend {
    /// Authenticate an existing user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the credentials are
    /// rejected.
    async fn login(&self, email: &Email, password: &str) -> Result<User, AuthError>;

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::RegistrationFailed` when the submission is
    /// rejected.
    async fn register(&self, name: &str, email: &Email, password: &str)
    -> Result<User, AuthError>;
}

/// Fake backend that validates field presence and answers after a delay.
///
/// Login always yields user id 1 with the display name taken from the email's
/// local part; registration mints an id from the current epoch milliseconds.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    /// Create a backend answering after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl AuthBackend for SimulatedBackend {
    async fn login(&self, email: &Email, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.delay).await;

        if password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(User {
            id: UserId::new(1),
            name: email.local_part().to_owned(),
            email: email.clone(),
        })
    }

    async fn register(
        &self,
        name: &str,
        email: &Email,
        password: &str,
    ) -> Result<User, AuthError> {
        tokio::time::sleep(self.delay).await;

        if name.trim().is_empty() || password.is_empty() {
            return Err(AuthError::RegistrationFailed);
        }

        Ok(User {
            id: UserId::new(Utc::now().timestamp_millis()),
            name: name.to_owned(),
            email: email.clone(),
        })
    }
}

/// The client-side auth session: current user plus durable mirroring.
pub struct AuthSession<B = SimulatedBackend> {
    backend: B,
    storage: Arc<dyn StorageBackend>,
    user: Option<User>,
}

impl<B: AuthBackend> AuthSession<B> {
    /// Load the session from durable storage.
    ///
    /// A missing, unreadable, or corrupt entry is treated as signed out.
    #[must_use]
    pub fn load(backend: B, storage: Arc<dyn StorageBackend>) -> Self {
        let user = match storage.get(USER_STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(%err, "corrupt user in storage, starting signed out");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(%err, "failed to read user from storage, starting signed out");
                None
            }
        };
        Self {
            backend,
            storage,
            user,
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Log in and persist the resulting user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed email and
    /// `AuthError::InvalidCredentials` when the backend rejects the login.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        let user = self.backend.login(&email, password).await?;
        info!(user_id = %user.id, "user logged in");
        self.store_user(&user);
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Register a new account and persist the resulting user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed email and
    /// `AuthError::RegistrationFailed` when the backend rejects the
    /// submission.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        let user = self.backend.register(name, &email, password).await?;
        info!(user_id = %user.id, "user registered");
        self.store_user(&user);
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Sign out: drop the user and remove the persisted entry.
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(err) = self.storage.remove(USER_STORAGE_KEY) {
            warn!(%err, "failed to remove persisted user");
        }
    }

    /// Write the user through to storage once more (shutdown bracket).
    pub(crate) fn flush(&self) {
        if let Some(user) = &self.user {
            self.store_user(user);
        }
    }

    fn store_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => {
                if let Err(err) = self.storage.put(USER_STORAGE_KEY, &json) {
                    warn!(%err, "failed to persist user");
                }
            }
            Err(err) => warn!(%err, "failed to serialize user"),
        }
    }
}

impl<B> std::fmt::Debug for AuthSession<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
