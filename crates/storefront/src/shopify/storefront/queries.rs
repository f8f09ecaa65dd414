//! GraphQL documents and wire shapes for the Shopify Storefront API.
//!
//! The documents are hand-written against the 2026-01 schema. Request
//! variables and response data mirror the selection sets exactly, with
//! camelCase field names.

use serde::{Deserialize, Serialize};

/// Operation name for [`CART_CREATE`].
pub const CART_CREATE_OPERATION: &str = "CartCreate";

/// Create a cart from a list of lines and return its checkout URL.
pub const CART_CREATE: &str = r"
mutation CartCreate($input: CartInput!) {
  cartCreate(input: $input) {
    cart {
      id
      checkoutUrl
      totalQuantity
    }
    userErrors {
      message
    }
  }
}
";

pub mod cart_create {
    use super::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: CartInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CartInput {
        pub lines: Vec<CartLineInput>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub note: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CartLineInput {
        pub merchandise_id: String,
        pub quantity: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub cart_create: Option<CartCreatePayload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CartCreatePayload {
        pub cart: Option<CartCreateCart>,
        #[serde(default)]
        pub user_errors: Vec<CartUserErrorFields>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CartCreateCart {
        pub id: String,
        pub checkout_url: String,
        pub total_quantity: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CartUserErrorFields {
        pub message: String,
    }
}
