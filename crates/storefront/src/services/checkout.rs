//! Simulated checkout and payment.
//!
//! [`PaymentGateway`] is the port a real payment processor would fill;
//! [`SimulatedGateway`] approves every order after a fixed delay (the
//! original UI ran a three-second timer). The cart is cleared only after the
//! gateway reports success, leaving storage holding an empty collection.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::cart::{CartLine, CartStore};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// A required form field is blank.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The gateway rejected the payment.
    #[error("payment declined: {0}")]
    PaymentDeclined(String),
}

/// Shipping and payment details captured by the checkout form.
#[derive(Debug, Clone, Default)]
pub struct CheckoutDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CheckoutDetails {
    /// Presence validation only; no format or card checks are performed.
    fn validate(&self) -> Result<(), CheckoutError> {
        let fields: [(&str, &'static str); 9] = [
            (self.first_name.as_str(), "first name"),
            (self.last_name.as_str(), "last name"),
            (self.email.as_str(), "email"),
            (self.address.as_str(), "address"),
            (self.city.as_str(), "city"),
            (self.postal_code.as_str(), "postal code"),
            (self.card_number.as_str(), "card number"),
            (self.expiry.as_str(), "expiry"),
            (self.cvv.as_str(), "cvv"),
        ];
        for (value, name) in fields {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// An order submitted to the payment gateway.
#[derive(Debug, Clone)]
pub struct Order {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

/// Confirmation returned by a successful payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: i64,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
}

/// Payment processing port.
pub trait PaymentGateway {
    /// Charge for `order`.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::PaymentDeclined` when the charge is rejected.
    async fn process(&self, order: &Order) -> Result<Receipt, CheckoutError>;
}

/// Gateway stub that approves every order after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    /// Create a gateway answering after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl PaymentGateway for SimulatedGateway {
    async fn process(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        tokio::time::sleep(self.delay).await;

        let now = Utc::now();
        Ok(Receipt {
            order_id: now.timestamp_millis(),
            total: order.total,
            placed_at: now,
        })
    }
}

/// Drives an order through validation, payment, and cart clearing.
#[derive(Debug)]
pub struct CheckoutService<G = SimulatedGateway> {
    gateway: G,
}

impl<G: PaymentGateway> CheckoutService<G> {
    /// Create a checkout service over `gateway`.
    #[must_use]
    pub const fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Place an order for the cart's contents.
    ///
    /// The cart is cleared only when the gateway succeeds; on any error it is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` for an empty cart,
    /// `CheckoutError::MissingField` for an incomplete form, and
    /// `CheckoutError::PaymentDeclined` when the gateway rejects the charge.
    pub async fn place_order(
        &self,
        cart: &mut CartStore,
        details: &CheckoutDetails,
    ) -> Result<Receipt, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        details.validate()?;

        let order = Order {
            lines: cart.lines().to_vec(),
            total: cart.total_price(),
        };
        let receipt = self.gateway.process(&order).await?;

        info!(order_id = receipt.order_id, total = %receipt.total, "order placed");
        cart.clear();
        Ok(receipt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use nextgen_core::{Category, ProductId};

    use crate::catalog::Product;
    use crate::storage::{MemoryStore, StorageBackend};

    use super::*;

    fn product(id: i64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            long_description: String::new(),
            price: Decimal::new(price_cents, 2),
            category: Category::Wear,
            image: String::new(),
            rating: 4.0,
            is_new: false,
            features: Vec::new(),
            slug: format!("product-{id}"),
            created_at: None,
        }
    }

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            address: "1 Analytical Way".into(),
            city: "London".into(),
            postal_code: "N1".into(),
            card_number: "4242424242424242".into(),
            expiry: "12/30".into(),
            cvv: "123".into(),
        }
    }

    fn cart_with_items(storage: &Arc<MemoryStore>) -> CartStore {
        let mut cart = CartStore::load(Arc::clone(storage) as Arc<dyn StorageBackend>);
        cart.add(product(1, 3999));
        cart.add(product(1, 3999));
        cart.add(product(2, 50));
        cart
    }

    /// Gateway that always declines; used to verify the cart survives.
    struct DecliningGateway;

    impl PaymentGateway for DecliningGateway {
        async fn process(&self, _order: &Order) -> Result<Receipt, CheckoutError> {
            Err(CheckoutError::PaymentDeclined("insufficient funds".into()))
        }
    }

    #[tokio::test]
    async fn test_successful_checkout_clears_cart_and_storage() {
        let storage = Arc::new(MemoryStore::new());
        let mut cart = cart_with_items(&storage);
        let service = CheckoutService::new(SimulatedGateway::new(Duration::ZERO));

        let receipt = service.place_order(&mut cart, &details()).await.unwrap();
        assert_eq!(receipt.total, Decimal::new(8048, 2));

        assert_eq!(cart.total_items(), 0);
        assert_eq!(storage.get("nextgen-cart").unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let storage = Arc::new(MemoryStore::new());
        let mut cart = CartStore::load(Arc::clone(&storage) as Arc<dyn StorageBackend>);
        let service = CheckoutService::new(SimulatedGateway::new(Duration::ZERO));

        let err = service.place_order(&mut cart, &details()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn test_blank_field_rejected_and_cart_kept() {
        let storage = Arc::new(MemoryStore::new());
        let mut cart = cart_with_items(&storage);
        let service = CheckoutService::new(SimulatedGateway::new(Duration::ZERO));

        let mut bad = details();
        bad.city = "  ".into();
        let err = service.place_order(&mut cart, &bad).await.unwrap_err();
        assert!(matches!(err, CheckoutError::MissingField("city")));
        assert_eq!(cart.total_items(), 3);
    }

    #[tokio::test]
    async fn test_declined_payment_keeps_cart() {
        let storage = Arc::new(MemoryStore::new());
        let mut cart = cart_with_items(&storage);
        let service = CheckoutService::new(DecliningGateway);

        let err = service.place_order(&mut cart, &details()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::PaymentDeclined(_)));
        assert_eq!(cart.total_items(), 3);

        // Storage still holds the lines.
        let stored = storage.get("nextgen-cart").unwrap().unwrap();
        assert_ne!(stored, "[]");
    }
}
