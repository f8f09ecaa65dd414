//! Fiber X Storefront library.
//!
//! The interactive half of the Fiber X landing page: the cart, the handoff
//! to Shopify checkout, and the landing widgets, as plain Rust state that a
//! front end (or the `fx` CLI) drives with events.
//!
//! # Modules
//!
//! - [`cart`] - Cart store, storage slots and the cart drawer
//! - [`checkout`] - Checkout button and the backend seam
//! - [`shopify`] - Storefront API client implementing the checkout backend
//! - [`landing`] - Menu, navigation, accordion, splash and effects
//! - [`state`] - Page session wiring
//! - [`config`] / [`error`] - Environment configuration and error reporting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod landing;
pub mod shopify;
pub mod state;
