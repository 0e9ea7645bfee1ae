//! Raw wire types for the remote catalog endpoints.
//!
//! The backend is loosely typed: prices arrive as decimal strings, timestamps
//! as bare strings, and both the listing and single-product endpoints answer
//! with one of three envelope shapes. Everything here is tolerant input; the
//! normalizer in [`super::normalize`] turns it into the internal shape.

use serde::Deserialize;

/// A product record as returned by the remote catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail: Option<String>,
    pub slug: String,
    /// Decimal string, e.g. `"299.99"`.
    pub price: String,
    /// Timestamp string; RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    pub category_id: i64,
    /// Explicit feature list; most records omit it and get category defaults.
    #[serde(default)]
    pub features: Vec<String>,
}

/// The three envelope shapes the listing endpoint is known to produce.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogEnvelope {
    /// A bare JSON array.
    Bare(Vec<RawProduct>),
    /// `{"data": [...]}`
    Data { data: Vec<RawProduct> },
    /// `{"products": [...]}`
    Products { products: Vec<RawProduct> },
}

impl CatalogEnvelope {
    /// Unwrap whichever envelope arrived.
    #[must_use]
    pub fn into_products(self) -> Vec<RawProduct> {
        match self {
            Self::Bare(products)
            | Self::Data { data: products }
            | Self::Products { products } => products,
        }
    }
}

/// The three envelope shapes the single-product endpoint is known to produce.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductEnvelope {
    /// A bare product object.
    Bare(RawProduct),
    /// `{"data": {...}}`
    Data { data: RawProduct },
    /// `{"product": {...}}`
    Product { product: RawProduct },
}

impl ProductEnvelope {
    /// Unwrap whichever envelope arrived.
    #[must_use]
    pub fn into_product(self) -> RawProduct {
        match self {
            Self::Bare(product)
            | Self::Data { data: product }
            | Self::Product { product } => product,
        }
    }
}
