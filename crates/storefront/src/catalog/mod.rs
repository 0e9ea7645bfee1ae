//! Remote catalog client.
//!
//! Fetches the product listing and single products from the backend's JSON
//! endpoints and normalizes them into [`Product`]s.
//!
//! # Failure policy
//!
//! Callers never see a listing failure: any transport, status, or shape error
//! is logged and replaced with the fixed six-product fallback catalog. A
//! single-product lookup degrades to `None`, which the UI renders as a
//! not-found state. Nothing is retried and no response is cached; every lookup
//! is a fresh network call.

mod fallback;
mod normalize;
mod raw;

pub use fallback::fallback_products;
pub use normalize::{Product, normalize};
pub use raw::RawProduct;

use chrono::Utc;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use nextgen_core::ProductId;

use crate::config::Config;
use raw::{CatalogEnvelope, ProductEnvelope};

/// Errors that can occur talking to the catalog endpoints.
///
/// These never escape the client; they exist so the absorption sites can log
/// what actually went wrong.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// Response body matched none of the tolerated envelope shapes.
    #[error("unrecognized response shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Client for the remote product catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    catalog_url: Url,
    product_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            catalog_url: config.catalog_url.clone(),
            product_url: config.product_url.clone(),
        }
    }

    /// Fetch and normalize the full catalog.
    ///
    /// Never fails: any error is absorbed and the fallback catalog returned.
    /// Ratings are drawn fresh on every fetch.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Vec<Product> {
        match self.fetch_listing().await {
            Ok(records) => {
                debug!(count = records.len(), "catalog fetched");
                let now = Utc::now();
                let mut rng = rand::rng();
                records
                    .into_iter()
                    .map(|record| normalize(record, now, &mut rng))
                    .collect()
            }
            Err(err) => {
                warn!(%err, "catalog fetch failed, serving fallback catalog");
                fallback_products(Utc::now())
            }
        }
    }

    /// Fetch a single product by numeric id.
    ///
    /// Returns `None` when the product is absent or the fetch fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn fetch_product_by_id(&self, id: ProductId) -> Option<Product> {
        self.fetch_single(("id", id.to_string())).await
    }

    /// Fetch a single product by slug.
    ///
    /// Returns `None` when the product is absent or the fetch fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn fetch_product_by_slug(&self, slug: &str) -> Option<Product> {
        self.fetch_single(("slug", slug.to_owned())).await
    }

    async fn fetch_single(&self, query: (&str, String)) -> Option<Product> {
        match self.fetch_single_raw(&query).await {
            Ok(record) => Some(normalize(record, Utc::now(), &mut rand::rng())),
            Err(err) => {
                warn!(%err, "single-product fetch failed");
                None
            }
        }
    }

    async fn fetch_listing(&self) -> Result<Vec<RawProduct>, CatalogError> {
        let response = self.http.get(self.catalog_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        let envelope: CatalogEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.into_products())
    }

    async fn fetch_single_raw(&self, query: &(&str, String)) -> Result<RawProduct, CatalogError> {
        let response = self
            .http
            .get(self.product_url.clone())
            .query(&[query])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        let envelope: ProductEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.into_product())
    }
}
