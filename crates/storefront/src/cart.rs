//! Shopping cart state with durable persistence.
//!
//! The cart is an insertion-ordered list of (product, quantity) lines with at
//! most one line per product id and every quantity at least 1. The full line
//! collection is mirrored to storage after every mutation and read back once
//! at startup; an unreadable entry degrades to an empty cart.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use nextgen_core::ProductId;

use crate::catalog::Product;
use crate::storage::StorageBackend;

/// Storage key holding the serialized cart lines.
pub(crate) const CART_STORAGE_KEY: &str = "nextgen-cart";

/// One cart entry: a product with a positive quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// The shopping cart.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Arc<dyn StorageBackend>,
}

impl CartStore {
    /// Load the cart from durable storage.
    ///
    /// A missing, unreadable, or corrupt entry is treated as an empty cart.
    #[must_use]
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let lines = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(lines) => lines,
                Err(err) => {
                    warn!(%err, "corrupt cart in storage, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "failed to read cart from storage, starting empty");
                Vec::new()
            }
        };
        Self { lines, storage }
    }

    /// Add one unit of `product`: increments an existing line's quantity, or
    /// appends a new line with quantity 1. Quantities are unbounded.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
        self.persist();
    }

    /// Set the quantity of the line for `product_id` to exactly `quantity`.
    ///
    /// A quantity of 0 removes the line. Setting an absent id is a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
        self.persist();
    }

    /// Remove the line for `product_id`; no-op when absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product.id != product_id);
        self.persist();
    }

    /// Empty the cart (invoked after a successful checkout).
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price x quantity across all lines, recomputed on every call.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.product.price * Decimal::from(line.quantity))
            .sum()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write through to storage once more (used by the shutdown bracket).
    pub(crate) fn flush(&self) {
        self.persist();
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }

    /// Mirror the full line collection to storage. Failures are logged and
    /// dropped; the in-memory cart stays authoritative for this session.
    fn persist(&self) {
        match serde_json::to_string(&self.lines) {
            Ok(json) => {
                if let Err(err) = self.storage.put(CART_STORAGE_KEY, &json) {
                    warn!(%err, "failed to persist cart");
                }
            }
            Err(err) => warn!(%err, "failed to serialize cart"),
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}
