// ═══════════════════════════════════════════════════════════════════
// Storage Tests — CartStore snapshot save / load / clear
// ═══════════════════════════════════════════════════════════════════

use paper_bloom_core::models::cart::{Cart, CartLineItem};
use paper_bloom_core::services::cart_service::CartService;
use paper_bloom_core::storage::cart_store::{CartStore, CART_STORE_FILE};

fn two_line_cart() -> Cart {
    let service = CartService::new();
    let mut cart = Cart::new();
    service.add(&mut cart, "1", "Rose Bouquet", 29.99);
    service.add(&mut cart, "1", "Rose Bouquet", 29.99);
    service.add(&mut cart, "3", "Mixed Flower Set", 49.99);
    cart
}

#[test]
fn save_then_load_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path());

    let cart = two_line_cart();
    store.save(&cart).unwrap();

    assert_eq!(store.load(), cart);
}

#[test]
fn load_without_snapshot_is_an_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path());

    assert!(store.load().is_empty());
}

#[test]
fn corrupt_snapshot_hydrates_empty_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path());

    std::fs::write(store.path(), "{not json").unwrap();
    assert!(store.load().is_empty());

    // Valid JSON of the wrong shape is just as unusable.
    std::fs::write(store.path(), r#"{"items": "nope"}"#).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn snapshot_is_a_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path());

    let mut cart = Cart::new();
    cart.items.push(CartLineItem::new("1", "Rose Bouquet", 29.99));
    store.save(&cart).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array(), "snapshot must serialize as a bare array, got: {raw}");
    assert_eq!(value[0]["id"], "1");
    assert_eq!(value[0]["qty"], 1);
}

#[test]
fn clear_removes_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path());

    store.save(&two_line_cart()).unwrap();
    assert!(store.path().exists());

    store.clear().unwrap();
    assert!(!store.path().exists());
    assert!(store.load().is_empty());
}

#[test]
fn clear_is_idempotent_on_a_missing_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path());

    store.clear().unwrap();
    store.clear().unwrap();
}

#[test]
fn in_dir_appends_the_fixed_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path());

    assert_eq!(store.path(), dir.path().join(CART_STORE_FILE));
    assert_eq!(CART_STORE_FILE, "cart.json");
}

#[test]
fn save_overwrites_the_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path());

    store.save(&two_line_cart()).unwrap();
    store.save(&Cart::new()).unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn save_into_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::in_dir(dir.path().join("does-not-exist"));

    assert!(store.save(&two_line_cart()).is_err());
}
