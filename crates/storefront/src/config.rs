//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required for checkout
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., fiberx.myshopify.com)
//! - `SHOPIFY_STOREFRONT_PUBLIC_TOKEN` - Storefront API public access token
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - API version (default: 2026-01)
//! - `FIBER_X_DATA_DIR` - Directory holding cart slots (default: .fiber-x)
//! - `FIBER_X_CART_SLOT` - Cart slot name (default: fiber-x-cart)
//! - `FIBER_X_CURRENCY` - Display currency (default: USD)
//! - `FIBER_X_LANDING_CONFIG` - Path to landing.yaml (default: built-in)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::collections::HashMap;
use std::path::PathBuf;

use fiber_x_core::CurrencyCode;
use secrecy::SecretString;
use thiserror::Error;

use crate::cart::{DEFAULT_CART_SLOT, validate_slot};

const DEFAULT_DATA_DIR: &str = ".fiber-x";
const DEFAULT_API_VERSION: &str = "2026-01";
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the cart slot files
    pub data_dir: PathBuf,
    /// Name of the slot the cart persists to
    pub cart_slot: String,
    /// Currency prices are displayed in
    pub currency: CurrencyCode,
    /// Landing widget configuration file, if not using the built-in defaults
    pub landing_config: Option<PathBuf>,
    /// Shopify Storefront API configuration; checkout is unavailable without it
    pub shopify: Option<ShopifyStorefrontConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Shopify Storefront API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ShopifyStorefrontConfig {
    /// Shopify store domain (e.g., fiberx.myshopify.com)
    pub store: String,
    /// Shopify API version (e.g., 2026-01)
    pub api_version: String,
    /// Storefront API public access token
    pub storefront_public_token: SecretString,
}

impl std::fmt::Debug for ShopifyStorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyStorefrontConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("storefront_public_token", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is invalid, if only half of the
    /// Shopify configuration is present, or if the access token looks like a
    /// placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// See [`StorefrontConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let data_dir = PathBuf::from(env.get_or_default("FIBER_X_DATA_DIR", DEFAULT_DATA_DIR));

        let cart_slot = env.get_or_default("FIBER_X_CART_SLOT", DEFAULT_CART_SLOT);
        validate_slot(&cart_slot).map_err(|e| {
            ConfigError::InvalidEnvVar("FIBER_X_CART_SLOT".to_string(), e.to_string())
        })?;

        let currency = env
            .get_or_default("FIBER_X_CURRENCY", "USD")
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("FIBER_X_CURRENCY".to_string(), e.to_string())
            })?;

        let landing_config = env.get_optional("FIBER_X_LANDING_CONFIG").map(PathBuf::from);
        let shopify = ShopifyStorefrontConfig::from_env(&env)?;

        Ok(Self {
            data_dir,
            cart_slot,
            currency,
            landing_config,
            shopify,
            sentry_dsn: env.get_optional("SENTRY_DSN"),
            sentry_environment: env.get_optional("SENTRY_ENVIRONMENT"),
        })
    }
}

impl ShopifyStorefrontConfig {
    /// `None` when neither the store nor the token is set.
    fn from_env<F>(env: &Env<F>) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = env.get_optional("SHOPIFY_STORE");
        let token = env.get_optional("SHOPIFY_STOREFRONT_PUBLIC_TOKEN");

        let (store, token) = match (store, token) {
            (None, None) => return Ok(None),
            (Some(store), Some(token)) => (store, token),
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar(
                    "SHOPIFY_STOREFRONT_PUBLIC_TOKEN".to_string(),
                ));
            }
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("SHOPIFY_STORE".to_string())),
        };

        validate_store_domain(&store)?;
        validate_secret_strength(&token, "SHOPIFY_STOREFRONT_PUBLIC_TOKEN")?;

        Ok(Some(Self {
            store,
            api_version: env.get_or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION),
            storefront_public_token: SecretString::from(token),
        }))
    }

    /// Storefront API GraphQL endpoint for this store.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}/api/{}/graphql.json",
            self.store, self.api_version
        )
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable source with the lookup helpers.
struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable, treating empty values as unset.
    fn get_optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Get a variable with a default value.
    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get_optional(key)
            .unwrap_or_else(|| default.to_string())
    }
}

/// The store must be a bare domain, without scheme or path.
fn validate_store_domain(store: &str) -> Result<(), ConfigError> {
    if store.contains("://") || store.contains('/') {
        return Err(ConfigError::InvalidEnvVar(
            "SHOPIFY_STORE".to_string(),
            format!("expected a bare domain like fiberx.myshopify.com, got {store:?}"),
        ));
    }
    Ok(())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a token is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
