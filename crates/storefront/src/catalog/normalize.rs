//! Normalization from raw wire records to internal products.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use nextgen_core::{Category, ProductId};

use super::raw::RawProduct;

/// Days a product counts as new after its creation timestamp.
const FRESHNESS_WINDOW_DAYS: i64 = 7;
/// Image used when the record carries no thumbnail.
pub(crate) const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=400";

/// An internal product, normalized from the remote representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub price: Decimal,
    pub category: Category,
    pub image: String,
    /// Review rating on the [3.5, 5.5) scale, one decimal place.
    pub rating: f64,
    /// Freshness flag: created within the last seven days.
    pub is_new: bool,
    pub features: Vec<String>,
    pub slug: String,
    /// `None` when the wire timestamp was unparseable.
    pub created_at: Option<DateTime<Utc>>,
}

/// Normalize a raw catalog record.
///
/// `now` anchors the freshness window and `rng` supplies the rating draw, so
/// callers control both: the catalog client draws ratings once per fetch, and
/// tests pin a seeded generator. The rating has no persisted source of truth
/// upstream, so it is not stable across fetches.
pub fn normalize(raw: RawProduct, now: DateTime<Utc>, rng: &mut impl Rng) -> Product {
    let mapped_category = Category::from_external_id(raw.category_id);
    let category = mapped_category.unwrap_or(Category::Accessories);

    let price = match raw.price.parse::<Decimal>() {
        Ok(price) => price,
        Err(err) => {
            warn!(product_id = raw.id, price = %raw.price, %err, "unparseable price, defaulting to zero");
            Decimal::ZERO
        }
    };

    let created_at = parse_timestamp(&raw.created_at);
    let is_new = created_at.is_some_and(|t| t > now - Duration::days(FRESHNESS_WINDOW_DAYS));

    let features = if raw.features.is_empty() {
        default_features(category)
    } else {
        raw.features
    };

    Product {
        id: ProductId::new(raw.id),
        name: raw.title,
        long_description: long_description(&raw.description, mapped_category),
        description: raw.description,
        price,
        category,
        image: raw
            .thumbnail
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
        rating: draw_rating(rng),
        is_new,
        features,
        slug: raw.slug,
        created_at,
    }
}

/// Draw a rating uniformly from [3.5, 5.5), rounded to one decimal.
pub(crate) fn draw_rating(rng: &mut impl Rng) -> f64 {
    let raw: f64 = rng.random_range(3.5..5.5);
    (raw * 10.0).round() / 10.0
}

/// Build the marketing blurb appended to every description.
///
/// An unmapped category id reads as a generic "product" here even though the
/// category field itself falls back to accessories.
fn long_description(description: &str, category: Option<Category>) -> String {
    let noun = category.map_or("product", Category::as_str);
    format!(
        "{description} This premium {noun} item is crafted with attention to detail and quality. \
         Perfect for those who appreciate fine craftsmanship and modern design."
    )
}

/// Fixed per-category feature list, used when the record supplies none.
fn default_features(category: Category) -> Vec<String> {
    let features: [&str; 4] = match category {
        Category::Accessories => [
            "Premium quality materials",
            "Fast shipping available",
            "30-day return policy",
            "Customer support included",
        ],
        Category::Nft => [
            "Blockchain verified",
            "Unique digital asset",
            "Transferable ownership",
            "Community access",
        ],
        Category::Wear => [
            "High-quality fabric",
            "Comfortable fit",
            "Durable construction",
            "Modern design",
        ],
    };
    features.into_iter().map(str::to_owned).collect()
}

/// Parse a wire timestamp; the backend emits RFC 3339 or SQL datetime format.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|t| t.and_utc())
        })
}
