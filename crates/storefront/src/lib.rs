//! NextGen Marketplace storefront core.
//!
//! This crate holds the state and data-access layer behind the storefront UI:
//! the remote catalog client with its normalization and fallback rules, the
//! persistent shopping cart, the simulated authentication and payment ports,
//! the rule-based chat assistant, and the static marketing content.
//!
//! Page rendering, routing, and visual components live in the UI layer and are
//! deliberately absent here.
//!
//! # Example
//!
//! ```rust,ignore
//! use nextgen_storefront::config::Config;
//! use nextgen_storefront::state::Storefront;
//!
//! let config = Config::load()?;
//! let mut store = Storefront::init(&config)?;
//!
//! let products = store.catalog().fetch_products().await;
//! if let Some(first) = products.first() {
//!     store.cart_mut().add(first.clone());
//! }
//!
//! store.shutdown();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod services;
pub mod state;
pub mod storage;
