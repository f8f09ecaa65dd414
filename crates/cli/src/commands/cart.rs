//! Cart commands.
//!
//! Every command opens the cart from the slot named by `FIBER_X_CART_SLOT`
//! under `FIBER_X_DATA_DIR`, so successive invocations share one cart.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use fiber_x_core::{LineItem, VariantId};
use fiber_x_storefront::cart::{CartDrawer, CartStore, CartView, FileStorage};
use fiber_x_storefront::checkout::{CheckoutButton, CheckoutOutcome};
use fiber_x_storefront::config::StorefrontConfig;
use fiber_x_storefront::error::AppError;
use fiber_x_storefront::shopify::StorefrontClient;
use rust_decimal::Decimal;

fn open_cart(config: &StorefrontConfig) -> CartStore<FileStorage> {
    CartStore::open(
        FileStorage::new(config.data_dir.clone()),
        config.cart_slot.clone(),
    )
}

/// Add one unit of a variant.
pub fn add(
    config: &StorefrontConfig,
    variant_id: String,
    product_id: String,
    title: String,
    unit_price: Decimal,
    image_url: Option<String>,
) -> Result<(), AppError> {
    let mut item = LineItem::new(variant_id, product_id, title, unit_price)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if let Some(url) = image_url {
        item = item.with_image_url(url);
    }

    let mut cart = open_cart(config);
    let title = item.title().to_owned();
    let quantity = cart.add_item(item)?;
    println!("Added to cart: {title} (quantity {quantity})");
    Ok(())
}

/// Remove a line item.
pub fn remove(config: &StorefrontConfig, variant_id: &str) -> Result<(), AppError> {
    let mut cart = open_cart(config);
    if cart.remove_item(&VariantId::new(variant_id))? {
        println!("Removed {variant_id}");
    } else {
        println!("{variant_id} is not in the cart");
    }
    Ok(())
}

/// Set a line item's quantity.
pub fn update(config: &StorefrontConfig, variant_id: &str, quantity: i64) -> Result<(), AppError> {
    let mut cart = open_cart(config);
    if cart.update_quantity(&VariantId::new(variant_id), quantity)? {
        if quantity > 0 {
            println!("{variant_id} quantity set to {quantity}");
        } else {
            println!("Removed {variant_id}");
        }
    } else {
        println!("{variant_id} is not in the cart");
    }
    Ok(())
}

/// Print the cart.
pub fn show(config: &StorefrontConfig, html: bool) -> Result<(), AppError> {
    let cart = open_cart(config);

    if html {
        let mut drawer = CartDrawer::new(config.currency)
            .with_items_container()
            .with_count_badge();
        drawer.render(cart.items())?;
        for fragment in [drawer.count_html(), drawer.items_html()]
            .into_iter()
            .flatten()
        {
            println!("{fragment}");
        }
        return Ok(());
    }

    for line in summary_lines(&CartView::new(cart.items(), config.currency)) {
        println!("{line}");
    }
    Ok(())
}

/// Remove every line item.
pub fn clear(config: &StorefrontConfig) -> Result<(), AppError> {
    let mut cart = open_cart(config);
    cart.clear()?;
    println!("Cart cleared");
    Ok(())
}

/// Start a Shopify checkout and print the URL to pay at.
///
/// A failed checkout has already been reported by the button, so it only
/// prints the notice and exits non-zero.
pub async fn checkout(config: &StorefrontConfig) -> Result<ExitCode, AppError> {
    let shopify = config.shopify.as_ref().ok_or_else(|| {
        AppError::CheckoutUnavailable(
            "set SHOPIFY_STORE and SHOPIFY_STOREFRONT_PUBLIC_TOKEN".to_string(),
        )
    })?;
    let client = StorefrontClient::new(shopify)?;
    let cart = open_cart(config);

    match CheckoutButton::new().submit(&cart, &client).await {
        CheckoutOutcome::Redirect(url) => {
            println!("{url}");
            Ok(ExitCode::SUCCESS)
        }
        CheckoutOutcome::Failed(notice) => {
            eprintln!("{}", notice.message);
            Ok(ExitCode::FAILURE)
        }
        CheckoutOutcome::Ignored => Ok(ExitCode::SUCCESS),
    }
}

/// One line per item, then the subtotal.
fn summary_lines(view: &CartView) -> Vec<String> {
    if view.items.is_empty() {
        return vec!["Your cart is empty".to_string()];
    }

    let mut lines: Vec<String> = view
        .items
        .iter()
        .map(|item| {
            format!(
                "{} x{} @ {} = {}  [{}]",
                item.title, item.quantity, item.price, item.line_price, item.variant_id
            )
        })
        .collect();
    let noun = if view.item_count == 1 { "item" } else { "items" };
    lines.push(format!(
        "Subtotal: {} ({} {noun})",
        view.subtotal, view.item_count
    ));
    lines
}
