//! Catalog client behavior against a live local endpoint.
//!
//! Each test binds a throwaway axum listener on a random port and points the
//! client at it, covering the three envelope shapes, the not-found path, and
//! the fallback substitution on transport and shape failures.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

use nextgen_core::{Category, ProductId};
use nextgen_storefront::catalog::CatalogClient;
use nextgen_storefront::config::Config;

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn config_for(addr: SocketAddr) -> Config {
    Config {
        catalog_url: format!("http://{addr}/api/products.php").parse().unwrap(),
        product_url: format!("http://{addr}/api/product.php").parse().unwrap(),
        storage_dir: PathBuf::from("."),
        auth_delay: Duration::ZERO,
        payment_delay: Duration::ZERO,
        chat_typing_delay: Duration::ZERO,
    }
}

async fn client_for(router: Router) -> CatalogClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let addr = serve(router).await;
    CatalogClient::new(&config_for(addr))
}

fn raw_product(id: i64, category_id: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Remote Product {id}"),
        "description": "From the wire.",
        "thumbnail": null,
        "slug": format!("remote-product-{id}"),
        "price": "19.99",
        "created_at": "2024-01-01T00:00:00Z",
        "category_id": category_id
    })
}

#[tokio::test]
async fn listing_bare_array_is_normalized() {
    let router = Router::new().route(
        "/api/products.php",
        get(|| async { axum::Json(json!([raw_product(1, 2), raw_product(2, 3)])) }),
    );
    let client = client_for(router).await;

    let products = client.fetch_products().await;
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].category, Category::Nft);
    assert_eq!(products[1].category, Category::Wear);
    assert_eq!(products[0].name, "Remote Product 1");
}

#[tokio::test]
async fn listing_data_envelope_accepted() {
    let router = Router::new().route(
        "/api/products.php",
        get(|| async { axum::Json(json!({ "data": [raw_product(1, 1)] })) }),
    );
    let client = client_for(router).await;

    let products = client.fetch_products().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, ProductId::new(1));
}

#[tokio::test]
async fn listing_products_envelope_accepted() {
    let router = Router::new().route(
        "/api/products.php",
        get(|| async { axum::Json(json!({ "products": [raw_product(5, 1)] })) }),
    );
    let client = client_for(router).await;

    let products = client.fetch_products().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, ProductId::new(5));
}

#[tokio::test]
async fn http_500_yields_exactly_the_fallback_catalog() {
    let router = Router::new().route(
        "/api/products.php",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = client_for(router).await;

    let products = client.fetch_products().await;
    assert_eq!(products.len(), 6);
    assert_eq!(products[0].name, "Premium Wireless Headphones");
    // Fallback ratings are fixed, not drawn.
    assert!((products[0].rating - 4.8).abs() < f64::EPSILON);
    assert!(products[0].is_new);
}

#[tokio::test]
async fn unrecognized_listing_shape_yields_fallback() {
    let router = Router::new().route(
        "/api/products.php",
        get(|| async { axum::Json(json!({ "items": [], "total": 0 })) }),
    );
    let client = client_for(router).await;

    let products = client.fetch_products().await;
    assert_eq!(products.len(), 6);
}

#[tokio::test]
async fn unreachable_endpoint_yields_fallback() {
    // Bind a port, then drop the listener so connections are refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CatalogClient::new(&config_for(addr));
    let products = client.fetch_products().await;
    assert_eq!(products.len(), 6);
}

/// Single-product endpoint that knows product 1 (wrapped in `{"product": ...}`)
/// and answers an error body for everything else.
fn single_product_router() -> Router {
    Router::new().route(
        "/api/product.php",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let known = params.get("id").is_some_and(|id| id == "1")
                || params.get("slug").is_some_and(|s| s == "remote-product-1");
            if known {
                axum::Json(json!({ "product": raw_product(1, 2) })).into_response()
            } else {
                axum::Json(json!({ "error": "not found" })).into_response()
            }
        }),
    )
}

#[tokio::test]
async fn single_product_by_id_found() {
    let client = client_for(single_product_router()).await;

    let product = client.fetch_product_by_id(ProductId::new(1)).await.unwrap();
    assert_eq!(product.id, ProductId::new(1));
    assert_eq!(product.category, Category::Nft);
}

#[tokio::test]
async fn single_product_by_slug_found() {
    let client = client_for(single_product_router()).await;

    let product = client.fetch_product_by_slug("remote-product-1").await.unwrap();
    assert_eq!(product.slug, "remote-product-1");
}

#[tokio::test]
async fn absent_product_is_none_not_error() {
    let client = client_for(single_product_router()).await;

    assert!(client.fetch_product_by_id(ProductId::new(404)).await.is_none());
    assert!(client.fetch_product_by_slug("no-such-slug").await.is_none());
}

#[tokio::test]
async fn single_product_bare_and_data_envelopes_accepted() {
    let router = Router::new().route(
        "/api/product.php",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let body: Response = match params.get("id").map(String::as_str) {
                Some("1") => axum::Json(raw_product(1, 1)).into_response(),
                Some("2") => axum::Json(json!({ "data": raw_product(2, 1) })).into_response(),
                _ => StatusCode::NOT_FOUND.into_response(),
            };
            body
        }),
    );
    let client = client_for(router).await;

    assert!(client.fetch_product_by_id(ProductId::new(1)).await.is_some());
    assert!(client.fetch_product_by_id(ProductId::new(2)).await.is_some());
    assert!(client.fetch_product_by_id(ProductId::new(3)).await.is_none());
}
