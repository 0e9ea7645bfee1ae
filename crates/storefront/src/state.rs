//! Explicitly constructed storefront state.
//!
//! The browser original held cart and auth in ambient context visible across
//! the whole UI tree. Here the entire storefront is one object with an
//! explicit `init` / `shutdown` lifecycle, handed to the UI layer by
//! reference.

use std::sync::Arc;

use tracing::info;

use crate::cart::CartStore;
use crate::catalog::CatalogClient;
use crate::chat::ChatWidget;
use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::{AuthBackend, AuthSession, SimulatedBackend};
use crate::services::checkout::{
    CheckoutDetails, CheckoutError, CheckoutService, PaymentGateway, Receipt, SimulatedGateway,
};
use crate::storage::{FileStore, StorageBackend};

/// The storefront: catalog access plus all client-side state.
///
/// Generic over the auth and payment ports so tests can swap in deterministic
/// implementations; production uses the simulated ones.
pub struct Storefront<B = SimulatedBackend, G = SimulatedGateway> {
    catalog: CatalogClient,
    cart: CartStore,
    auth: AuthSession<B>,
    checkout: CheckoutService<G>,
    chat: ChatWidget,
    storage: Arc<dyn StorageBackend>,
}

impl Storefront {
    /// Initialize from configuration: open the storage directory, load any
    /// persisted cart and user, and wire the simulated service backends.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the storage directory cannot be opened.
    pub fn init(config: &Config) -> Result<Self, AppError> {
        let storage: Arc<dyn StorageBackend> = Arc::new(FileStore::open(&config.storage_dir)?);
        let storefront = Self::with_parts(
            config,
            storage,
            SimulatedBackend::new(config.auth_delay),
            SimulatedGateway::new(config.payment_delay),
        );
        info!(storage_dir = %config.storage_dir.display(), "storefront initialized");
        Ok(storefront)
    }
}

impl<B: AuthBackend, G: PaymentGateway> Storefront<B, G> {
    /// Assemble a storefront from explicit parts.
    #[must_use]
    pub fn with_parts(
        config: &Config,
        storage: Arc<dyn StorageBackend>,
        auth_backend: B,
        gateway: G,
    ) -> Self {
        Self {
            catalog: CatalogClient::new(config),
            cart: CartStore::load(Arc::clone(&storage)),
            auth: AuthSession::load(auth_backend, Arc::clone(&storage)),
            checkout: CheckoutService::new(gateway),
            chat: ChatWidget::new(config.chat_typing_delay),
            storage,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub fn auth(&self) -> &AuthSession<B> {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthSession<B> {
        &mut self.auth
    }

    pub fn chat_mut(&mut self) -> &mut ChatWidget {
        &mut self.chat
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn StorageBackend> {
        &self.storage
    }

    /// Place an order for the current cart contents.
    ///
    /// The cart is cleared (and its storage entry emptied) only on success.
    ///
    /// # Errors
    ///
    /// See [`CheckoutService::place_order`].
    pub async fn place_order(
        &mut self,
        details: &CheckoutDetails,
    ) -> Result<Receipt, CheckoutError> {
        self.checkout.place_order(&mut self.cart, details).await
    }

    /// Explicit teardown: write state through to storage one final time.
    ///
    /// Every mutation already persists, so this is a safety flush plus the
    /// lifecycle bracket matching [`Storefront::init`].
    pub fn shutdown(self) {
        self.cart.flush();
        self.auth.flush();
        info!("storefront shut down");
    }
}

impl<B, G> std::fmt::Debug for Storefront<B, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("cart", &self.cart)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}
