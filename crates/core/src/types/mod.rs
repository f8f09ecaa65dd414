//! Core types for Fiber X.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod price;

pub use id::*;
pub use line_item::{LineItem, LineItemError, MAX_UNIT_PRICE};
pub use price::{CurrencyCode, Price, UnknownCurrency};
