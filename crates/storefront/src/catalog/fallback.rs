//! Hardcoded catalog served when the remote endpoint is unreachable.
//!
//! The callers of [`super::CatalogClient::fetch_products`] never observe a
//! fetch failure; they get these six products instead. Ratings and freshness
//! flags here are fixed, unlike normalized products.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use nextgen_core::{Category, ProductId};

use super::normalize::{PLACEHOLDER_IMAGE, Product};

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    name: &str,
    description: &str,
    long_description: &str,
    price_cents: i64,
    category: Category,
    rating: f64,
    is_new: bool,
    features: [&str; 4],
    slug: &str,
    age_days: i64,
    now: DateTime<Utc>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        long_description: long_description.to_owned(),
        price: Decimal::new(price_cents, 2),
        category,
        image: PLACEHOLDER_IMAGE.to_owned(),
        rating,
        is_new,
        features: features.into_iter().map(str::to_owned).collect(),
        slug: slug.to_owned(),
        created_at: Some(now - Duration::days(age_days)),
    }
}

/// The fixed six-product fallback catalog.
///
/// `now` anchors the staggered creation timestamps (0 through 5 days old).
#[must_use]
pub fn fallback_products(now: DateTime<Utc>) -> Vec<Product> {
    vec![
        product(
            1,
            "Premium Wireless Headphones",
            "High-quality wireless headphones with noise cancellation and premium sound quality.",
            "Experience audio like never before with our premium wireless headphones. Featuring \
             advanced noise cancellation technology, crystal-clear sound quality, and comfortable \
             over-ear design for extended listening sessions.",
            29999,
            Category::Accessories,
            4.8,
            true,
            [
                "Active noise cancellation",
                "30-hour battery life",
                "Premium leather padding",
                "Bluetooth 5.0 connectivity",
            ],
            "premium-wireless-headphones",
            0,
            now,
        ),
        product(
            2,
            "Smart Fitness Watch",
            "Advanced fitness tracking with heart rate monitoring and GPS functionality.",
            "Stay on top of your fitness goals with our advanced smart fitness watch. Features \
             comprehensive health monitoring, GPS tracking, and long-lasting battery life.",
            24999,
            Category::Accessories,
            4.6,
            false,
            [
                "Heart rate monitoring",
                "GPS tracking",
                "Water resistant",
                "7-day battery life",
            ],
            "smart-fitness-watch",
            1,
            now,
        ),
        product(
            3,
            "Digital Art Collection #001",
            "Exclusive digital artwork by renowned crypto artist featuring abstract geometric patterns.",
            "Own a piece of digital art history with this exclusive NFT collection. Each piece is \
             uniquely crafted and verified on the blockchain.",
            50,
            Category::Nft,
            4.9,
            true,
            [
                "Unique digital artwork",
                "Blockchain verified",
                "High resolution",
                "Artist signed",
            ],
            "digital-art-collection-001",
            2,
            now,
        ),
        product(
            4,
            "Premium Cotton T-Shirt",
            "Ultra-soft premium cotton t-shirt with modern fit and sustainable materials.",
            "Experience comfort and style with our premium cotton t-shirt. Made from 100% organic \
             cotton with a modern fit that's perfect for any occasion.",
            3999,
            Category::Wear,
            4.7,
            true,
            [
                "100% organic cotton",
                "Modern fit",
                "Sustainable materials",
                "Pre-shrunk fabric",
            ],
            "premium-cotton-t-shirt",
            3,
            now,
        ),
        product(
            5,
            "Luxury Leather Wallet",
            "Handcrafted genuine leather wallet with RFID protection and premium finish.",
            "Protect your cards and cash in style with our luxury leather wallet. Features RFID \
             protection and premium craftsmanship.",
            8999,
            Category::Accessories,
            4.9,
            false,
            [
                "Genuine leather construction",
                "RFID protection",
                "Multiple card slots",
                "Compact design",
            ],
            "luxury-leather-wallet",
            4,
            now,
        ),
        product(
            6,
            "Designer Hoodie",
            "Stylish designer hoodie with premium materials and contemporary design.",
            "Stay comfortable and stylish with our designer hoodie. Made from premium materials \
             with a contemporary design that's perfect for any season.",
            8999,
            Category::Wear,
            4.8,
            false,
            [
                "Premium materials",
                "Contemporary design",
                "Comfortable fit",
                "Durable construction",
            ],
            "designer-hoodie",
            5,
            now,
        ),
    ]
}
