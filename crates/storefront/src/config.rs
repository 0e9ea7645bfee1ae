//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults point at the hosted backend.
//!
//! - `NEXTGEN_CATALOG_URL` - Product listing endpoint
//! - `NEXTGEN_PRODUCT_URL` - Single-product endpoint, queried with `?id=` / `?slug=`
//! - `NEXTGEN_STORAGE_DIR` - Directory for durable key-value state (default: `.nextgen`)
//! - `NEXTGEN_AUTH_DELAY_MS` - Simulated auth backend latency (default: 1000)
//! - `NEXTGEN_PAYMENT_DELAY_MS` - Simulated payment gateway latency (default: 3000)
//! - `NEXTGEN_CHAT_TYPING_DELAY_MS` - Chat assistant typing delay (default: 1000)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default product-listing endpoint.
const DEFAULT_CATALOG_URL: &str = "https://backend-projectpweb.kesug.com/api/products.php";
/// Default single-product endpoint.
const DEFAULT_PRODUCT_URL: &str = "http://project-revisi.test:8080/api/products.php";
/// Default durable storage directory.
const DEFAULT_STORAGE_DIR: &str = ".nextgen";

const DEFAULT_AUTH_DELAY_MS: u64 = 1000;
const DEFAULT_PAYMENT_DELAY_MS: u64 = 3000;
const DEFAULT_CHAT_TYPING_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Product listing endpoint.
    pub catalog_url: Url,
    /// Single-product endpoint (queried with `?id=` / `?slug=`).
    pub product_url: Url,
    /// Directory holding durable key-value state.
    pub storage_dir: PathBuf,
    /// Latency of the simulated auth backend.
    pub auth_delay: Duration,
    /// Latency of the simulated payment gateway.
    pub payment_delay: Duration,
    /// Delay before the chat assistant answers.
    pub chat_typing_delay: Duration,
}

impl Config {
    /// Load configuration, reading a `.env` file first if one exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            catalog_url: url_var("NEXTGEN_CATALOG_URL", DEFAULT_CATALOG_URL)?,
            product_url: url_var("NEXTGEN_PRODUCT_URL", DEFAULT_PRODUCT_URL)?,
            storage_dir: env::var("NEXTGEN_STORAGE_DIR")
                .map_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from),
            auth_delay: millis_var("NEXTGEN_AUTH_DELAY_MS", DEFAULT_AUTH_DELAY_MS)?,
            payment_delay: millis_var("NEXTGEN_PAYMENT_DELAY_MS", DEFAULT_PAYMENT_DELAY_MS)?,
            chat_typing_delay: millis_var(
                "NEXTGEN_CHAT_TYPING_DELAY_MS",
                DEFAULT_CHAT_TYPING_DELAY_MS,
            )?,
        })
    }
}

/// Read a URL variable, falling back to a default.
fn url_var(name: &str, default: &str) -> Result<Url, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_owned());
    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string()))
}

/// Read a millisecond-duration variable, falling back to a default.
fn millis_var(name: &str, default: u64) -> Result<Duration, ConfigError> {
    let millis = match env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string()))?,
        Err(_) => default,
    };
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.catalog_url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(config.payment_delay, Duration::from_millis(3000));
        assert_eq!(config.storage_dir, PathBuf::from(".nextgen"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = url_var("NEXTGEN_TEST_MISSING", "not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_millis_default() {
        let d = millis_var("NEXTGEN_TEST_MISSING_MS", 250).unwrap();
        assert_eq!(d, Duration::from_millis(250));
    }
}
