//! External-service ports and their simulated implementations.
//!
//! The storefront has no real backend: authentication and payment are ports
//! (traits) whose shipped implementations answer after a fixed delay. Tests
//! swap in zero-delay or failing implementations.

pub mod auth;
pub mod checkout;
