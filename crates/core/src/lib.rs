//! NextGen Core - Shared types library.
//!
//! This crate provides common types used across all NextGen Marketplace
//! components:
//! - `storefront` - The storefront core (catalog, cart, checkout, chat)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
