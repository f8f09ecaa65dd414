//! Integration tests for the cart store against real storage.
//!
//! These tests exercise persistence through `FileStorage` and the cart
//! properties that must hold for any sequence of mutations.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use fiber_x_core::{LineItem, VariantId};
use fiber_x_storefront::cart::{CartEvent, CartStorage, CartStore, FileStorage, MemoryStorage};
use rust_decimal::Decimal;

fn item(variant: &str, price: i64) -> LineItem {
    LineItem::new(variant, "fiber-x", format!("Fiber X {variant}"), Decimal::from(price)).unwrap()
}

// =============================================================================
// Cart Properties
// =============================================================================

#[test]
fn test_repeated_adds_collapse_into_one_line() {
    for count in 1..=5_u32 {
        let mut cart = CartStore::open(MemoryStorage::new(), "cart");
        for _ in 0..count {
            cart.add_item(item("v1", 2499)).unwrap();
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&VariantId::new("v1")).unwrap().quantity(), count);
    }
}

#[test]
fn test_update_to_zero_equals_remove() {
    let mut updated = CartStore::open(MemoryStorage::new(), "cart");
    let mut removed = CartStore::open(MemoryStorage::new(), "cart");
    for cart in [&mut updated, &mut removed] {
        cart.add_item(item("v1", 2499)).unwrap();
        cart.add_item(item("v2", 6999)).unwrap();
    }

    assert!(updated.update_quantity(&VariantId::new("v1"), 0).unwrap());
    assert!(removed.remove_item(&VariantId::new("v1")).unwrap());
    assert_eq!(updated.items(), removed.items());
}

#[test]
fn test_total_is_sum_of_line_totals() {
    let mut cart = CartStore::open(MemoryStorage::new(), "cart");
    assert_eq!(cart.total(), Decimal::ZERO);

    cart.add_item(item("v1", 2499)).unwrap();
    cart.add_item(item("v2", 6999)).unwrap();
    cart.update_quantity(&VariantId::new("v2"), 3).unwrap();

    let expected: Decimal = cart.items().iter().map(LineItem::line_total).sum();
    assert_eq!(cart.total(), expected);
    assert_eq!(cart.total(), Decimal::from(2499 + 3 * 6999));
}

#[test]
fn test_scenario_same_variant_twice() {
    let mut cart = CartStore::open(MemoryStorage::new(), "cart");
    cart.add_item(item("v1", 2499)).unwrap();
    cart.add_item(item("v1", 2499)).unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items().first().unwrap().quantity(), 2);
    assert_eq!(cart.total(), Decimal::from(4998));
}

#[test]
fn test_scenario_two_distinct_items() {
    let mut cart = CartStore::open(MemoryStorage::new(), "cart");
    cart.add_item(item("v1", 2499)).unwrap();
    cart.add_item(item("v2", 6999)).unwrap();

    assert_eq!(cart.total_item_count(), 2);
    assert_eq!(cart.total(), Decimal::from(9498));
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_file_storage_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = CartStore::open(FileStorage::new(dir.path()), "fiber-x-cart");
    cart.add_item(item("v1", 2499).with_image_url("images/30.jpg"))
        .unwrap();
    cart.add_item(item("v2", 6999)).unwrap();
    cart.add_item(item("v1", 2499)).unwrap();
    let saved = cart.items().to_vec();

    let reopened = CartStore::open(FileStorage::new(dir.path()), "fiber-x-cart");
    assert_eq!(reopened.items(), saved.as_slice());
    assert!(dir.path().join("fiber-x-cart.json").exists());
}

#[test]
fn test_slots_are_independent() {
    let dir = tempfile::tempdir().unwrap();

    let mut a = CartStore::open(FileStorage::new(dir.path()), "cart-a");
    a.add_item(item("v1", 2499)).unwrap();

    let b = CartStore::open(FileStorage::new(dir.path()), "cart-b");
    assert!(b.is_empty());
}

#[test]
fn test_corrupted_slot_restores_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    for corrupt in [
        "not json",
        "{\"variantId\": \"v1\"}",
        r#"[{"variantId":"v1","productId":"p","title":"t","unitPrice":"-5","quantity":1}]"#,
        r#"[{"variantId":"v1","productId":"p","title":"t","unitPrice":"5","quantity":0}]"#,
        r#"[{"variantId":"v1","productId":"p","title":"t","unitPrice":"79228162514264337593543950335","quantity":2}]"#,
    ] {
        storage.write("fiber-x-cart", corrupt).unwrap();
        let cart = CartStore::open(&storage, "fiber-x-cart");
        assert!(cart.is_empty(), "{corrupt} should restore empty");
        assert_eq!(cart.total(), Decimal::ZERO);
    }
}

#[test]
fn test_non_utf8_slot_restores_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fiber-x-cart.json"), [0xc3, 0x28, 0x5b, 0x5d]).unwrap();

    let mut cart = CartStore::open(FileStorage::new(dir.path()), "fiber-x-cart");
    assert!(cart.is_empty());

    cart.add_item(item("v1", 2499)).unwrap();
    let reopened = CartStore::open(FileStorage::new(dir.path()), "fiber-x-cart");
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_corrupted_slot_is_overwritten_by_next_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.write("fiber-x-cart", "][").unwrap();

    let mut cart = CartStore::open(&storage, "fiber-x-cart");
    cart.add_item(item("v1", 2499)).unwrap();

    let reopened = CartStore::open(&storage, "fiber-x-cart");
    assert_eq!(reopened.total(), Decimal::from(2499));
}

// =============================================================================
// Subscriptions
// =============================================================================

#[test]
fn test_subscriber_sees_committed_state() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let mut cart = CartStore::open(&storage, "fiber-x-cart");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    cart.subscribe(move |event, items| {
        sink.borrow_mut().push((event.clone(), items.len()));
    });

    cart.add_item(item("v1", 2499)).unwrap();
    cart.update_quantity(&VariantId::new("v1"), 4).unwrap();
    cart.clear().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            (
                CartEvent::Added {
                    variant_id: VariantId::new("v1"),
                    quantity: 1,
                },
                1,
            ),
            (
                CartEvent::QuantityChanged {
                    variant_id: VariantId::new("v1"),
                    quantity: 4,
                },
                1,
            ),
            (CartEvent::Cleared, 0),
        ]
    );
    assert!(CartStore::open(&storage, "fiber-x-cart").is_empty());
}
