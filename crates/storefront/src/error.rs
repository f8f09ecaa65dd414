//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type. Errors that indicate something broken
//! outside the user's control (storage, Shopify) are captured to Sentry by
//! [`report`]; everything a user sees goes through
//! [`AppError::user_message`], which never exposes internal details.

use thiserror::Error;

use crate::cart::{CartError, RenderError};
use crate::config::ConfigError;
use crate::landing::LandingConfigError;
use crate::shopify::ShopifyError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Landing page configuration could not be loaded.
    #[error("Landing config error: {0}")]
    LandingConfig(#[from] LandingConfigError),

    /// Cart mutation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// Cart drawer rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Checkout needs Shopify configuration that is not present.
    #[error("Checkout is not configured: {0}")]
    CheckoutUnavailable(String),

    /// Bad input from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether this error should be captured to Sentry.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        matches!(
            self,
            Self::Cart(CartError::Storage(_) | CartError::Serialize(_))
                | Self::Shopify(_)
                | Self::Render(_)
        )
    }

    /// Message safe to show to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Shopify(ShopifyError::RateLimited(secs)) => {
                format!("Checkout is busy, please try again in {secs} seconds")
            }
            Self::Shopify(_) | Self::CheckoutUnavailable(_) => {
                "We couldn't start checkout. Please try again.".to_string()
            }
            Self::Cart(CartError::QuantityOutOfRange(_) | CartError::TotalOverflow) => {
                "That quantity is too large".to_string()
            }
            Self::Cart(_) | Self::Render(_) => {
                "Your cart couldn't be updated. Please try again.".to_string()
            }
            Self::Config(_) | Self::LandingConfig(_) => "Something went wrong".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        }
    }
}

/// Log an error and, if it is reportable, capture it to Sentry.
pub fn report(err: &AppError) {
    if err.is_reportable() {
        let event_id = sentry::capture_error(err);
        tracing::error!(
            error = %err,
            sentry_event_id = %event_id,
            "Operation failed"
        );
    } else {
        tracing::warn!(error = %err, "Operation failed");
    }
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("variant_id", "gid://shopify/ProductVariant/1")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::StorageError;

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid quantity".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid quantity");

        let err = AppError::CheckoutUnavailable("SHOPIFY_STORE not set".to_string());
        assert_eq!(
            err.to_string(),
            "Checkout is not configured: SHOPIFY_STORE not set"
        );
    }

    #[test]
    fn test_user_messages_hide_internals() {
        let err = AppError::Shopify(ShopifyError::UserError(
            "gid://shopify/ProductVariant/9 does not exist".to_string(),
        ));
        assert!(!err.user_message().contains("gid://"));

        let err = AppError::Cart(CartError::Storage(StorageError::Poisoned));
        assert!(!err.user_message().contains("lock"));
    }

    #[test]
    fn test_rate_limit_message_includes_delay() {
        let err = AppError::Shopify(ShopifyError::RateLimited(12));
        assert_eq!(
            err.user_message(),
            "Checkout is busy, please try again in 12 seconds"
        );
    }

    #[test]
    fn test_reportable_errors() {
        assert!(AppError::Shopify(ShopifyError::RateLimited(1)).is_reportable());
        assert!(AppError::Cart(CartError::Storage(StorageError::Poisoned)).is_reportable());
        assert!(!AppError::Cart(CartError::QuantityOutOfRange(-1)).is_reportable());
        assert!(!AppError::Cart(CartError::TotalOverflow).is_reportable());
        assert!(!AppError::BadRequest("x".to_string()).is_reportable());
    }
}
