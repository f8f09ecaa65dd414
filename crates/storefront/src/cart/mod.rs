//! The cart store.
//!
//! [`CartStore`] owns the ordered list of line items for one page session and
//! mirrors it to a named storage slot. Every mutation writes the slot before
//! it touches memory, so the in-memory copy and the persisted copy never
//! diverge: a failed write leaves both exactly as they were.
//!
//! Widgets that need to redraw register a callback with
//! [`CartStore::subscribe`]; callbacks run synchronously after each
//! successful mutation, in registration order.
//!
//! # Example
//!
//! ```rust
//! use fiber_x_core::LineItem;
//! use fiber_x_storefront::cart::{CartStore, MemoryStorage};
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartStore::open(MemoryStorage::new(), "fiber-x-cart");
//! let item = LineItem::new("v1", "p1", "Fiber X", Decimal::from(2499)).unwrap();
//!
//! cart.add_item(item.clone()).unwrap();
//! cart.add_item(item).unwrap();
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total(), Decimal::from(4998));
//! ```

mod storage;
mod view;

pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError, validate_slot};
pub use view::{ADDED_ACKNOWLEDGMENT, CartDrawer, CartItemView, CartView, RenderError};

use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroU32;

use fiber_x_core::{LineItem, LineItemError, VariantId};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

/// Default storage slot for the cart.
pub const DEFAULT_CART_SLOT: &str = "fiber-x-cart";

/// Errors returned by cart mutations.
///
/// A mutation that fails has not changed the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// Writing the slot failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The item list could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Requested quantity does not fit in a line item.
    #[error("Quantity out of range: {0}")]
    QuantityOutOfRange(i64),

    /// The resulting cart total would not fit in a `Decimal`.
    #[error("Cart total out of range")]
    TotalOverflow,
}

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// An item was added or its quantity bumped by one. Front ends show the
    /// "added" acknowledgment for this event.
    Added { variant_id: VariantId, quantity: u32 },
    /// A line item was deleted.
    Removed { variant_id: VariantId },
    /// A line item's quantity was set.
    QuantityChanged { variant_id: VariantId, quantity: u32 },
    /// Every line item was deleted.
    Cleared,
    /// The item list was reloaded from the slot.
    Restored,
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&CartEvent, &[LineItem])>;

/// Why a stored item list was rejected.
#[derive(Debug, Error)]
enum RestoreError {
    #[error("unparseable: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid item: {0}")]
    Invalid(#[from] LineItemError),
    #[error("duplicate variant {0}")]
    Duplicate(VariantId),
    #[error("total out of range")]
    TotalOverflow,
}

/// In-memory cart mirrored to a storage slot.
pub struct CartStore<S: CartStorage> {
    storage: S,
    slot: String,
    items: Vec<LineItem>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: CartStorage> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("storage", &self.storage)
            .field("slot", &self.slot)
            .field("items", &self.items)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<S: CartStorage> CartStore<S> {
    /// Open the cart stored in `slot`.
    ///
    /// Never fails: unreadable or malformed data yields an empty cart.
    pub fn open(storage: S, slot: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            slot: slot.into(),
            items: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.restore();
        store
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Reload the item list from the slot, replacing the in-memory copy.
    ///
    /// Returns the number of line items loaded. A missing slot, a storage
    /// read error, or malformed data all produce an empty cart. Subscribers
    /// are notified with [`CartEvent::Restored`].
    #[instrument(skip(self), fields(slot = %self.slot))]
    pub fn restore(&mut self) -> usize {
        self.items = match self.storage.read(&self.slot) {
            Ok(Some(raw)) => match decode_items(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "Stored cart is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::debug!("No stored cart");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored cart, starting empty");
                Vec::new()
            }
        };
        self.notify(&CartEvent::Restored);
        self.items.len()
    }

    /// Write the current item list to the slot.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if serialization or the storage write fails.
    pub fn persist(&self) -> Result<(), CartError> {
        self.write_items(&self.items)
    }

    fn write_items(&self, items: &[LineItem]) -> Result<(), CartError> {
        let raw = serde_json::to_string(items)?;
        self.storage.write(&self.slot, &raw)?;
        Ok(())
    }

    /// Persist `next` and only then make it the current list.
    fn commit(&mut self, next: Vec<LineItem>, event: CartEvent) -> Result<(), CartError> {
        if checked_total(&next).is_none() {
            return Err(CartError::TotalOverflow);
        }
        self.write_items(&next)?;
        self.items = next;
        tracing::debug!(?event, items = self.items.len(), "Cart committed");
        self.notify(&event);
        Ok(())
    }

    fn notify(&mut self, event: &CartEvent) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event, &self.items);
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `item`.
    ///
    /// If a line item with the same variant exists its quantity goes up by
    /// one; otherwise `item` is appended with a quantity of one (any quantity
    /// it carries is ignored). Returns the resulting quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart could not be persisted.
    #[instrument(skip(self, item), fields(variant_id = %item.variant_id()))]
    pub fn add_item(&mut self, mut item: LineItem) -> Result<u32, CartError> {
        let variant_id = item.variant_id().clone();
        let mut next = self.items.clone();

        let quantity = if let Some(existing) = next
            .iter_mut()
            .find(|line| line.variant_id() == &variant_id)
        {
            existing.increment();
            existing.quantity()
        } else {
            item.set_quantity(NonZeroU32::MIN);
            next.push(item);
            1
        };

        self.commit(
            next,
            CartEvent::Added {
                variant_id: variant_id.clone(),
                quantity,
            },
        )?;
        crate::error::add_breadcrumb(
            "cart",
            "Added to cart",
            Some(&[("variant_id", variant_id.as_str())]),
        );
        tracing::info!(%variant_id, quantity, "Item added to cart");
        Ok(quantity)
    }

    /// Remove the line item for `variant_id`.
    ///
    /// Returns `Ok(false)` without persisting or notifying if the variant is
    /// not in the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart could not be persisted.
    #[instrument(skip(self), fields(variant_id = %variant_id))]
    pub fn remove_item(&mut self, variant_id: &VariantId) -> Result<bool, CartError> {
        if self.position(variant_id).is_none() {
            return Ok(false);
        }

        let next = self
            .items
            .iter()
            .filter(|line| line.variant_id() != variant_id)
            .cloned()
            .collect();

        self.commit(
            next,
            CartEvent::Removed {
                variant_id: variant_id.clone(),
            },
        )?;
        tracing::info!("Item removed from cart");
        Ok(true)
    }

    /// Set the quantity for `variant_id`. A quantity of zero or less removes
    /// the line item.
    ///
    /// Returns `Ok(false)` without persisting or notifying if the variant is
    /// not in the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::QuantityOutOfRange` for quantities above
    /// `u32::MAX`, `CartError::TotalOverflow` if the cart total would no
    /// longer fit, or a storage error if the cart could not be persisted.
    #[instrument(skip(self), fields(variant_id = %variant_id))]
    pub fn update_quantity(
        &mut self,
        variant_id: &VariantId,
        quantity: i64,
    ) -> Result<bool, CartError> {
        if quantity <= 0 {
            return self.remove_item(variant_id);
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(CartError::QuantityOutOfRange(quantity))?;

        let Some(pos) = self.position(variant_id) else {
            return Ok(false);
        };

        let mut next = self.items.clone();
        if let Some(line) = next.get_mut(pos) {
            line.set_quantity(quantity);
        }

        self.commit(
            next,
            CartEvent::QuantityChanged {
                variant_id: variant_id.clone(),
                quantity: quantity.get(),
            },
        )?;
        Ok(true)
    }

    /// Delete every line item.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart could not be persisted.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.commit(Vec::new(), CartEvent::Cleared)?;
        tracing::info!("Cart cleared");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Sum of `unit_price × quantity` over all line items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        // Commit and restore keep the sum in range
        checked_total(&self.items).unwrap_or(Decimal::MAX)
    }

    /// Sum of quantities over all line items.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Line items in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, variant_id: &VariantId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.variant_id() == variant_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, variant_id: &VariantId) -> Option<usize> {
        self.items
            .iter()
            .position(|line| line.variant_id() == variant_id)
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a callback invoked after every successful mutation.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&CartEvent, &[LineItem]) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}

/// Sum of line totals, or `None` if it overflows.
pub(crate) fn checked_total(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.line_total()))
}

/// Parse and validate a stored item list.
fn decode_items(raw: &str) -> Result<Vec<LineItem>, RestoreError> {
    let items: Vec<LineItem> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        item.validate()?;
        if !seen.insert(item.variant_id()) {
            return Err(RestoreError::Duplicate(item.variant_id().clone()));
        }
    }
    if checked_total(&items).is_none() {
        return Err(RestoreError::TotalOverflow);
    }
    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use fiber_x_core::MAX_UNIT_PRICE;

    use super::*;

    fn item(variant: &str, price: i64) -> LineItem {
        LineItem::new(variant, "p1", format!("Item {variant}"), Decimal::from(price)).unwrap()
    }

    fn cart() -> CartStore<MemoryStorage> {
        CartStore::open(MemoryStorage::new(), DEFAULT_CART_SLOT)
    }

    /// Storage whose reads and writes can be switched off.
    #[derive(Debug, Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_reads: std::cell::Cell<bool>,
        fail_writes: std::cell::Cell<bool>,
    }

    impl CartStorage for FlakyStorage {
        fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads.get() {
                return Err(StorageError::Io {
                    slot: slot.to_owned(),
                    source: std::io::Error::other("permission denied"),
                });
            }
            self.inner.read(slot)
        }

        fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(StorageError::Io {
                    slot: slot.to_owned(),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.write(slot, value)
        }

        fn remove(&self, slot: &str) -> Result<(), StorageError> {
            self.inner.remove(slot)
        }
    }

    #[test]
    fn test_repeated_add_increments_single_line() {
        let mut cart = cart();
        for _ in 0..5 {
            cart.add_item(item("v1", 10)).unwrap();
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&VariantId::new("v1")).unwrap().quantity(), 5);
    }

    #[test]
    fn test_add_ignores_incoming_quantity() {
        let mut cart = cart();
        let mut incoming = item("v1", 10);
        incoming.set_quantity(NonZeroU32::new(9).unwrap());

        assert_eq!(cart.add_item(incoming).unwrap(), 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = cart();
        cart.add_item(item("b", 1)).unwrap();
        cart.add_item(item("a", 1)).unwrap();
        cart.add_item(item("b", 1)).unwrap();

        let order: Vec<_> = cart.items().iter().map(|l| l.variant_id().as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let mut by_update = cart();
        let mut by_remove = cart();
        for store in [&mut by_update, &mut by_remove] {
            store.add_item(item("v1", 3)).unwrap();
            store.add_item(item("v2", 4)).unwrap();
        }

        assert!(by_update.update_quantity(&VariantId::new("v1"), 0).unwrap());
        assert!(by_remove.remove_item(&VariantId::new("v1")).unwrap());
        assert_eq!(by_update.items(), by_remove.items());
    }

    #[test]
    fn test_update_negative_removes() {
        let mut cart = cart();
        cart.add_item(item("v1", 3)).unwrap();
        assert!(cart.update_quantity(&VariantId::new("v1"), -2).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_sets_quantity() {
        let mut cart = cart();
        cart.add_item(item("v1", 3)).unwrap();
        cart.update_quantity(&VariantId::new("v1"), 4).unwrap();
        assert_eq!(cart.total_item_count(), 4);
        assert_eq!(cart.total(), Decimal::from(12));
    }

    #[test]
    fn test_update_out_of_range_rejected() {
        let mut cart = cart();
        cart.add_item(item("v1", 3)).unwrap();
        let err = cart
            .update_quantity(&VariantId::new("v1"), i64::from(u32::MAX) + 1)
            .unwrap_err();
        assert!(matches!(err, CartError::QuantityOutOfRange(_)));
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_unknown_variant_is_noop() {
        let mut cart = cart();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        cart.subscribe(move |_, _| *counter.borrow_mut() += 1);

        assert!(!cart.remove_item(&VariantId::new("missing")).unwrap());
        assert!(!cart.update_quantity(&VariantId::new("missing"), 3).unwrap());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_totals_empty_cart() {
        let cart = cart();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.total_item_count(), 0);
    }

    #[test]
    fn test_two_distinct_items_scenario() {
        let mut cart = cart();
        cart.add_item(item("v1", 2499)).unwrap();
        cart.add_item(item("v2", 6999)).unwrap();
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.total(), Decimal::from(9498));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let storage = FlakyStorage::default();
        let mut cart = CartStore::open(&storage, "cart");
        cart.add_item(item("v1", 5)).unwrap();

        storage.fail_writes.set(true);
        assert!(matches!(
            cart.add_item(item("v1", 5)),
            Err(CartError::Storage(_))
        ));
        assert!(cart.add_item(item("v2", 5)).is_err());
        assert!(cart.remove_item(&VariantId::new("v1")).is_err());
        assert!(cart.clear().is_err());

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_item_count(), 1);

        // Persisted copy still matches memory
        let reopened = CartStore::open(&storage, "cart");
        assert_eq!(reopened.items(), cart.items());
    }

    #[test]
    fn test_read_error_opens_empty_cart() {
        let storage = FlakyStorage::default();
        CartStore::open(&storage, "cart")
            .add_item(item("v1", 5))
            .unwrap();

        storage.fail_reads.set(true);
        let mut cart = CartStore::open(&storage, "cart");
        assert!(cart.is_empty());
        assert_eq!(cart.restore(), 0);

        // Writes still go through once the store is open
        cart.add_item(item("v2", 7)).unwrap();
        storage.fail_reads.set(false);
        let reopened = CartStore::open(&storage, "cart");
        assert_eq!(reopened.items(), cart.items());
    }

    #[test]
    fn test_restore_notifies_subscribers() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::open(&storage, "cart");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cart.subscribe(move |event, items| sink.borrow_mut().push((event.clone(), items.len())));

        // Another writer updates the slot behind this store
        let mut other = CartStore::open(&storage, "cart");
        other.add_item(item("v1", 5)).unwrap();
        other.add_item(item("v2", 5)).unwrap();

        assert_eq!(cart.restore(), 2);
        assert_eq!(*seen.borrow(), vec![(CartEvent::Restored, 2)]);
    }

    #[test]
    fn test_subscribers_notified_in_order_until_unsubscribed() {
        let mut cart = cart();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&log);
        let first = cart.subscribe(move |event, items| {
            first_log.borrow_mut().push(format!("first:{event:?}:{}", items.len()));
        });
        let second_log = Rc::clone(&log);
        cart.subscribe(move |_, _| second_log.borrow_mut().push("second".to_string()));

        cart.add_item(item("v1", 1)).unwrap();
        assert!(cart.unsubscribe(first));
        assert!(!cart.unsubscribe(first));
        cart.clear().unwrap();

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert!(log[0].starts_with("first:Added"));
        assert!(log[0].ends_with(":1"));
        assert_eq!(log[1], "second");
        assert_eq!(log[2], "second");
    }

    #[test]
    fn test_added_event_carries_new_quantity() {
        let mut cart = cart();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        cart.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

        cart.add_item(item("v1", 1)).unwrap();
        cart.add_item(item("v1", 1)).unwrap();

        assert_eq!(
            events.borrow().last(),
            Some(&CartEvent::Added {
                variant_id: VariantId::new("v1"),
                quantity: 2,
            })
        );
    }

    #[test]
    fn test_quantity_that_overflows_total_is_rejected() {
        let mut cart = cart();
        let (mut accepted, mut rejected) = (0, 0);
        for i in 0..20 {
            let variant = format!("v{i}");
            let line = LineItem::new(variant.as_str(), "p1", "Bulk", MAX_UNIT_PRICE).unwrap();
            cart.add_item(line).unwrap();
            match cart.update_quantity(&VariantId::new(variant), i64::from(u32::MAX)) {
                Ok(_) => accepted += 1,
                Err(CartError::TotalOverflow) => rejected += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        // 18 full lines fit below Decimal::MAX, a 19th does not
        assert_eq!((accepted, rejected), (18, 2));
        assert_eq!(cart.len(), 20);
        assert_eq!(cart.get(&VariantId::new("v19")).unwrap().quantity(), 1);
        let expected = MAX_UNIT_PRICE * Decimal::from(u32::MAX) * Decimal::from(18)
            + MAX_UNIT_PRICE * Decimal::from(2);
        assert_eq!(cart.total(), expected);
    }

    #[test]
    fn test_rejected_overflow_does_not_persist_or_notify() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::open(&storage, "cart");
        for i in 0..19 {
            let variant = format!("v{i}");
            let line = LineItem::new(variant.as_str(), "p1", "Bulk", MAX_UNIT_PRICE).unwrap();
            cart.add_item(line).unwrap();
        }
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        cart.subscribe(move |_, _| *counter.borrow_mut() += 1);

        for i in 0..19 {
            let _ = cart.update_quantity(&VariantId::new(format!("v{i}")), i64::from(u32::MAX));
        }

        assert_eq!(*calls.borrow(), 18);
        let reopened = CartStore::open(&storage, "cart");
        assert_eq!(reopened.items(), cart.items());
    }

    #[test]
    fn test_decode_rejects_unbounded_price() {
        let raw = r#"[{"variantId":"v1","productId":"p","title":"a","unitPrice":"79228162514264337593543950335","quantity":2}]"#;
        assert!(matches!(decode_items(raw), Err(RestoreError::Invalid(_))));

        let storage = MemoryStorage::new();
        storage.write("cart", raw).unwrap();
        let cart = CartStore::open(&storage, "cart");
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_decode_rejects_overflowing_total() {
        let line = format!(
            r#"{{"productId":"p","title":"a","unitPrice":"{MAX_UNIT_PRICE}","quantity":{}}}"#,
            u32::MAX
        );
        let lines: Vec<String> = (0..19)
            .map(|i| line.replacen('{', &format!(r#"{{"variantId":"v{i}","#), 1))
            .collect();
        let raw = format!("[{}]", lines.join(","));
        assert!(matches!(decode_items(&raw), Err(RestoreError::TotalOverflow)));
    }

    #[test]
    fn test_decode_rejects_duplicates() {
        let raw = r#"[
            {"variantId":"v1","productId":"p","title":"a","unitPrice":"1","quantity":1},
            {"variantId":"v1","productId":"p","title":"a","unitPrice":"1","quantity":2}
        ]"#;
        assert!(matches!(decode_items(raw), Err(RestoreError::Duplicate(_))));
    }

    #[test]
    fn test_decode_accepts_numeric_prices() {
        let raw = r#"[{"variantId":"v1","productId":"p","title":"a","unitPrice":2499,"quantity":2}]"#;
        let items = decode_items(raw).unwrap();
        assert_eq!(items[0].line_total(), Decimal::from(4998));
    }
}
