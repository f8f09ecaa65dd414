//! Cart line items.
//!
//! A [`LineItem`] is one product variant in the cart together with its
//! quantity. The wire format (camelCase keys, decimal price as a string) is
//! the one stored in the cart's persistent slot.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::{ProductId, VariantId};
use super::price::{CurrencyCode, Price};

/// Largest accepted unit price (10^18).
///
/// Any unit price up to this bound times any `u32` quantity fits in a
/// [`Decimal`], so [`LineItem::line_total`] is exact for every valid item.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Errors raised when a line item would violate its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineItemError {
    /// Unit prices are never negative.
    #[error("Negative unit price for {variant_id}: {price}")]
    NegativePrice { variant_id: VariantId, price: Decimal },

    /// Unit price above [`MAX_UNIT_PRICE`].
    #[error("Unit price too large for {variant_id}: {price}")]
    PriceTooLarge { variant_id: VariantId, price: Decimal },

    /// Stored line items always carry at least one unit.
    #[error("Zero quantity for {0}")]
    ZeroQuantity(VariantId),

    /// Every line item needs a variant to check out.
    #[error("Empty variant ID")]
    EmptyVariantId,
}

/// One product-variant entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    variant_id: VariantId,
    product_id: ProductId,
    title: String,
    unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    quantity: u32,
}

impl LineItem {
    /// Create a line item with a quantity of one.
    ///
    /// # Errors
    ///
    /// Returns `LineItemError` if the variant ID is empty or the price is
    /// negative or above [`MAX_UNIT_PRICE`].
    pub fn new(
        variant_id: impl Into<VariantId>,
        product_id: impl Into<ProductId>,
        title: impl Into<String>,
        unit_price: Decimal,
    ) -> Result<Self, LineItemError> {
        let item = Self {
            variant_id: variant_id.into(),
            product_id: product_id.into(),
            title: title.into(),
            unit_price,
            image_url: None,
            quantity: 1,
        };
        item.validate()?;
        Ok(item)
    }

    /// Attach an image URL for the cart drawer thumbnail.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Check the invariants that every stored line item upholds.
    ///
    /// Deserialized items bypass [`LineItem::new`], so restored data must be
    /// passed through here before it is trusted.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), LineItemError> {
        if self.variant_id.as_str().is_empty() {
            return Err(LineItemError::EmptyVariantId);
        }
        if self.unit_price.is_sign_negative() && !self.unit_price.is_zero() {
            return Err(LineItemError::NegativePrice {
                variant_id: self.variant_id.clone(),
                price: self.unit_price,
            });
        }
        if self.unit_price > MAX_UNIT_PRICE {
            return Err(LineItemError::PriceTooLarge {
                variant_id: self.variant_id.clone(),
                price: self.unit_price,
            });
        }
        if self.quantity == 0 {
            return Err(LineItemError::ZeroQuantity(self.variant_id.clone()));
        }
        Ok(())
    }

    #[must_use]
    pub const fn variant_id(&self) -> &VariantId {
        &self.variant_id
    }

    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replace the quantity. Zero is unrepresentable here; removal is the
    /// cart's job.
    pub const fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity.get();
    }

    /// Add one unit, saturating at `u32::MAX`.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// `unit_price × quantity`.
    ///
    /// Exact for validated items; saturates at `Decimal::MAX` for an
    /// unvalidated price above [`MAX_UNIT_PRICE`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Unit price in the given currency.
    #[must_use]
    pub const fn price(&self, currency: CurrencyCode) -> Price {
        Price::new(self.unit_price, currency)
    }
}
