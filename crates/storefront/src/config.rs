//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; the demo runs with zero configuration.
//!
//! - `SHOPMASTER_API_URL` - Catalog API base URL (default: `https://fakestoreapi.com`)
//! - `SHOPMASTER_DATA_DIR` - Directory for the persisted cart (default: `.shopmaster`)
//! - `SHOPMASTER_TAX_RATE` - Checkout tax rate as a decimal fraction (default: `0.16`)
//! - `SHOPMASTER_STORE_NAME` - Store name printed on tickets (default: `SHOPMASTER`)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use shopmaster_core::receipt::DEFAULT_TAX_RATE;

/// Default catalog API base URL.
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

/// Default directory for durable state.
pub const DEFAULT_DATA_DIR: &str = ".shopmaster";

/// Default store name on rendered tickets.
pub const DEFAULT_STORE_NAME: &str = "SHOPMASTER";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog API base URL
    pub api_url: String,
    /// Directory holding the persisted cart slot
    pub data_dir: PathBuf,
    /// Tax rate applied at checkout (decimal fraction, e.g. 0.16)
    pub tax_rate: Decimal,
    /// Store name printed on tickets
    pub store_name: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            tax_rate: DEFAULT_TAX_RATE,
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed
    /// (e.g. a tax rate outside `[0, 1)`).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("SHOPMASTER_API_URL", DEFAULT_API_URL);
        let data_dir = PathBuf::from(get_env_or_default("SHOPMASTER_DATA_DIR", DEFAULT_DATA_DIR));
        let tax_rate = match std::env::var("SHOPMASTER_TAX_RATE") {
            Ok(raw) => parse_tax_rate(&raw)
                .map_err(|e| ConfigError::InvalidEnvVar("SHOPMASTER_TAX_RATE".to_string(), e))?,
            Err(_) => DEFAULT_TAX_RATE,
        };
        let store_name = get_env_or_default("SHOPMASTER_STORE_NAME", DEFAULT_STORE_NAME);

        Ok(Self {
            api_url,
            data_dir,
            tax_rate,
            store_name,
        })
    }
}

/// Parse a tax rate from its string form and validate its range.
fn parse_tax_rate(raw: &str) -> Result<Decimal, String> {
    let rate = Decimal::from_str(raw.trim()).map_err(|e| e.to_string())?;
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(format!("tax rate must be in [0, 1), got {rate}"));
    }
    Ok(rate)
}

fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
