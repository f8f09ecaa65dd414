//! Cart drawer display models and rendering.

use askama::Template;
use fiber_x_core::{CurrencyCode, LineItem, Price};
use rust_decimal::Decimal;
use thiserror::Error;

use super::CartEvent;

/// Message shown briefly after an item is added.
pub const ADDED_ACKNOWLEDGMENT: &str = "Added to cart";

/// Template rendering failed.
#[derive(Debug, Error)]
#[error("Render error: {0}")]
pub struct RenderError(#[from] askama::Error);

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub variant_id: String,
    pub title: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image_url: Option<String>,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Build the display model for `items` priced in `currency`.
    #[must_use]
    pub fn new(items: &[LineItem], currency: CurrencyCode) -> Self {
        let subtotal = super::checked_total(items).unwrap_or(Decimal::MAX);
        Self {
            items: items
                .iter()
                .map(|line| CartItemView::new(line, currency))
                .collect(),
            subtotal: Price::new(subtotal, currency).display(),
            item_count: items.iter().map(|line| u64::from(line.quantity())).sum(),
        }
    }

    /// Create an empty cart.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self::new(&[], currency)
    }
}

impl CartItemView {
    fn new(line: &LineItem, currency: CurrencyCode) -> Self {
        Self {
            variant_id: line.variant_id().to_string(),
            title: line.title().to_owned(),
            quantity: line.quantity(),
            price: line.price(currency).display(),
            line_price: Price::new(line.line_total(), currency).display(),
            image_url: line.image_url().map(str::to_owned),
        }
    }
}

/// Cart items fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartView,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
struct CartCountTemplate {
    count: u64,
}

/// The cart drawer and its count badge.
///
/// Either container may be missing from the page; a missing container is
/// simply never rendered.
#[derive(Debug, Clone, Default)]
pub struct CartDrawer {
    currency: CurrencyCode,
    items_html: Option<String>,
    count_html: Option<String>,
    acknowledgment: Option<&'static str>,
    open: bool,
}

impl CartDrawer {
    /// A drawer with no containers attached.
    #[must_use]
    pub fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    /// Attach the item rows container.
    #[must_use]
    pub fn with_items_container(mut self) -> Self {
        self.items_html = Some(String::new());
        self
    }

    /// Attach the count badge container.
    #[must_use]
    pub fn with_count_badge(mut self) -> Self {
        self.count_html = Some(String::new());
        self
    }

    /// Re-render every attached container from `items`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if a template fails to render.
    pub fn render(&mut self, items: &[LineItem]) -> Result<(), RenderError> {
        let view = CartView::new(items, self.currency);
        if let Some(html) = self.items_html.as_mut() {
            *html = CartItemsTemplate { cart: &view }.render()?;
        }
        if let Some(html) = self.count_html.as_mut() {
            *html = CartCountTemplate {
                count: view.item_count,
            }
            .render()?;
        }
        Ok(())
    }

    /// React to a cart change: re-render, and acknowledge additions.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if a template fails to render.
    pub fn refresh(&mut self, event: &CartEvent, items: &[LineItem]) -> Result<(), RenderError> {
        self.render(items)?;
        if matches!(event, CartEvent::Added { .. }) {
            self.acknowledgment = Some(ADDED_ACKNOWLEDGMENT);
        }
        Ok(())
    }

    /// Current item rows, if the container exists.
    #[must_use]
    pub fn items_html(&self) -> Option<&str> {
        self.items_html.as_deref()
    }

    /// Current badge, if the container exists.
    #[must_use]
    pub fn count_html(&self) -> Option<&str> {
        self.count_html.as_deref()
    }

    /// Take the pending "added" acknowledgment, if any.
    pub const fn take_acknowledgment(&mut self) -> Option<&'static str> {
        self.acknowledgment.take()
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}
