//! Domain types for the Shopify checkout handoff.
//!
//! These are the crate's own types; the GraphQL wire shapes live in
//! `storefront::queries` and are converted at the client boundary.

use fiber_x_core::{LineItem, VariantId};
use serde::Serialize;
use url::Url;

/// One (variant, quantity) pair sent to Shopify at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLine {
    /// Product variant to buy.
    pub variant_id: VariantId,
    /// Number of units.
    pub quantity: u32,
}

impl From<&LineItem> for CheckoutLine {
    fn from(line: &LineItem) -> Self {
        Self {
            variant_id: line.variant_id().clone(),
            quantity: line.quantity(),
        }
    }
}

impl CheckoutLine {
    /// Map every cart line item to a checkout line, preserving order.
    #[must_use]
    pub fn from_items(items: &[LineItem]) -> Vec<Self> {
        items.iter().map(Self::from).collect()
    }
}

/// A checkout session issued by Shopify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Shopify cart ID backing the checkout.
    pub cart_id: String,
    /// Where to send the buyer to pay.
    pub checkout_url: Url,
    /// Total quantity Shopify accepted.
    pub total_quantity: i64,
}
