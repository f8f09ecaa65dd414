//! Fiber X Core - Shared cart types.
//!
//! This crate provides the types shared by every Fiber X component:
//! - `storefront` - Cart store, checkout and landing page widgets
//! - `cli` - Terminal driver for the cart and checkout
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
