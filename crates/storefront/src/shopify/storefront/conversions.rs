//! Conversions from Storefront API wire shapes to crate types.

use url::Url;

use crate::shopify::types::{CheckoutLine, CheckoutSession};
use crate::shopify::{GraphQLError, ShopifyError};

use super::queries::cart_create;

/// Build `cartCreate` variables from checkout lines.
pub fn checkout_variables(lines: &[CheckoutLine]) -> cart_create::Variables {
    cart_create::Variables {
        input: cart_create::CartInput {
            lines: lines
                .iter()
                .map(|line| cart_create::CartLineInput {
                    merchandise_id: line.variant_id.to_string(),
                    quantity: i64::from(line.quantity),
                })
                .collect(),
            note: None,
        },
    }
}

/// Turn a `cartCreate` response into a checkout session.
///
/// User errors win over a returned cart: Shopify may return a partial cart
/// alongside errors, and checking that out would drop lines silently.
pub fn convert_cart_create(
    data: cart_create::ResponseData,
) -> Result<CheckoutSession, ShopifyError> {
    let Some(payload) = data.cart_create else {
        return Err(ShopifyError::GraphQL(vec![GraphQLError::message(
            "cartCreate returned no payload",
        )]));
    };

    if !payload.user_errors.is_empty() {
        return Err(ShopifyError::UserError(
            payload
                .user_errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
        ));
    }

    let cart = payload.cart.ok_or_else(|| {
        ShopifyError::GraphQL(vec![GraphQLError::message("Failed to create cart")])
    })?;

    let checkout_url =
        Url::parse(&cart.checkout_url).map_err(|source| ShopifyError::InvalidCheckoutUrl {
            url: cart.checkout_url.clone(),
            source,
        })?;

    Ok(CheckoutSession {
        cart_id: cart.id,
        checkout_url,
        total_quantity: cart.total_quantity,
    })
}
