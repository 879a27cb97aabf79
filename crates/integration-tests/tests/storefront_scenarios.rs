//! Whole storefront sessions against file-backed storage.
//!
//! Each test owns a temporary data directory; "reloading the page" is
//! opening a new `AppState` on the same directory.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use cake_shop_core::{CakeId, Price};
use cake_shop_integration_tests::{RecordingPrompt, TestContext};
use cake_shop_storefront::View;
use cake_shop_storefront::intake::CakeForm;
use cake_shop_storefront::projection::SortKey;
use cake_shop_storefront::state::DELETE_CONFIRMATION;

// ============================================================================
// Cart persistence
// ============================================================================

#[test]
fn test_cart_survives_reload() {
    let ctx = TestContext::new();

    let mut shop = ctx.open();
    assert!(shop.add_to_cart(CakeId::new(1)));
    assert!(shop.add_to_cart(CakeId::new(1)));
    assert!(shop.add_to_cart(CakeId::new(3)));
    drop(shop);

    let shop = ctx.open();
    assert_eq!(shop.cart_item_count(), 3);
    assert_eq!(shop.cart().line(CakeId::new(1)).map(|l| l.quantity), Some(2));
    // 2 x 24.99 + 22.00
    assert_eq!(shop.cart_total(), Price::from_cents(7198));
}

#[test]
fn test_every_cart_command_is_written_through() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();

    shop.add_to_cart(CakeId::new(2));
    assert_eq!(ctx.stored_lines().len(), 1);

    let line = shop.cart().lines()[0].clone();
    shop.increment_line(&line);
    assert_eq!(ctx.stored_lines()[0].quantity, 2);

    shop.decrement_line(CakeId::new(2));
    assert_eq!(ctx.stored_lines()[0].quantity, 1);

    shop.decrement_line(CakeId::new(2));
    assert!(ctx.stored_lines().is_empty());
}

#[test]
fn test_stored_lines_use_camel_case_wire_format() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    shop.add_to_cart(CakeId::new(1));

    let raw = std::fs::read_to_string(ctx.cart_file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let line = &value[0];
    assert_eq!(line["id"], 1);
    assert_eq!(line["name"], "Velvet Dream");
    assert_eq!(line["price"], 24.99);
    assert_eq!(line["quantity"], 1);
    assert!(line["imageUrl"].is_string());
}

#[test]
fn test_corrupt_cart_starts_empty() {
    let ctx = TestContext::new();
    ctx.open().add_to_cart(CakeId::new(1));
    ctx.write_raw_cart("{not json");

    let mut shop = ctx.open();
    assert!(shop.cart().is_empty());

    // The next command overwrites the bad value
    shop.add_to_cart(CakeId::new(4));
    assert_eq!(ctx.stored_lines().len(), 1);
}

#[test]
fn test_stored_cart_is_repaired_on_load() {
    let ctx = TestContext::new();
    ctx.open().add_to_cart(CakeId::new(1));
    ctx.write_raw_cart(
        r#"[
            {"id":1,"name":"Velvet Dream","price":24.99,"imageUrl":"a.jpg","quantity":1},
            {"id":2,"name":"Chocolate Decadence","price":28.5,"imageUrl":"b.jpg","quantity":0},
            {"id":1,"name":"Velvet Dream","price":24.99,"imageUrl":"a.jpg","quantity":2}
        ]"#,
    );

    let shop = ctx.open();
    assert_eq!(shop.cart().len(), 1);
    assert_eq!(shop.cart_item_count(), 3);
}

#[test]
fn test_oversized_price_saturates_and_survives_reload() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();

    let mut form = CakeForm::new();
    form.name = "Gilded Tower".to_string();
    form.price = "79228162514264337593543950335".to_string();
    form.set_image_url("https://example.com/tower.jpg");
    let mut prompt = RecordingPrompt::default();
    let id = shop.submit_form(&form, &mut prompt).unwrap();
    assert_eq!(shop.catalog().get(id).unwrap().price, Price::MAX);

    assert!(shop.add_to_cart(id));
    assert!(shop.add_to_cart(id));
    assert!(shop.add_to_cart(CakeId::new(1)));
    assert_eq!(shop.cart_total(), Price::MAX);
    drop(shop);

    let shop = ctx.open();
    assert_eq!(shop.cart().line(id).map(|l| l.quantity), Some(2));
    assert_eq!(shop.cart().line(id).map(|l| l.price), Some(Price::MAX));
    assert_eq!(shop.cart_item_count(), 3);
    assert_eq!(shop.cart_total(), Price::MAX);
}

#[test]
fn test_extreme_stored_line_loads_with_capped_total() {
    let ctx = TestContext::new();
    ctx.write_raw_cart(
        r#"[
            {"id":9,"name":"Mountain","price":1e20,"imageUrl":"m.jpg","quantity":4294967295},
            {"id":1,"name":"Velvet Dream","price":24.99,"imageUrl":"a.jpg","quantity":1}
        ]"#,
    );

    let mut shop = ctx.open();
    assert_eq!(shop.cart().len(), 2);
    assert_eq!(shop.cart_item_count(), u32::MAX);
    assert_eq!(shop.cart_total(), Price::MAX);

    // Writing the cart back keeps the capped line as loaded
    shop.add_to_cart(CakeId::new(1));
    let stored = ctx.stored_lines();
    assert_eq!(stored[0].quantity, u32::MAX);
    assert_eq!(stored[0].price, Price::MAX);
    assert_eq!(stored[1].quantity, 2);
}

#[test]
fn test_precise_price_survives_reload() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();

    let mut form = CakeForm::new();
    form.name = "Exact Slice".to_string();
    form.price = "0.1234567890123456789".to_string();
    form.set_image_url("https://example.com/slice.jpg");
    let mut prompt = RecordingPrompt::default();
    let id = shop.submit_form(&form, &mut prompt).unwrap();
    let price = shop.catalog().get(id).unwrap().price;
    shop.add_to_cart(id);
    drop(shop);

    let shop = ctx.open();
    assert_eq!(shop.cart().line(id).map(|l| l.price), Some(price));
    assert_eq!(shop.cart_total(), Price::from_cents(12));
}

// ============================================================================
// Checkout
// ============================================================================

#[test]
fn test_checkout_acknowledges_total_and_keeps_cart() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    shop.add_to_cart(CakeId::new(5));
    shop.add_to_cart(CakeId::new(6));

    let mut prompt = RecordingPrompt::default();
    assert_eq!(shop.checkout(&mut prompt), Some(Price::from_cents(5200)));
    assert_eq!(
        prompt.acknowledgments,
        vec!["Thank you for your order! Your total is $52.00.".to_string()]
    );

    drop(shop);
    assert_eq!(ctx.open().cart_item_count(), 2);
}

#[test]
fn test_checkout_with_empty_cart_says_nothing() {
    let ctx = TestContext::new();
    let shop = ctx.open();
    let mut prompt = RecordingPrompt::default();
    assert_eq!(shop.checkout(&mut prompt), None);
    assert!(prompt.acknowledgments.is_empty());
}

// ============================================================================
// Catalog admin
// ============================================================================

#[test]
fn test_delete_cascades_to_stored_cart() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    shop.add_to_cart(CakeId::new(2));
    shop.add_to_cart(CakeId::new(4));

    let mut prompt = RecordingPrompt::answering(&[false, true]);
    assert!(!shop.delete_cake(CakeId::new(2), &mut prompt));
    assert_eq!(shop.cart().len(), 2);

    assert!(shop.delete_cake(CakeId::new(2), &mut prompt));
    assert_eq!(prompt.confirmations, vec![DELETE_CONFIRMATION; 2]);
    assert!(shop.catalog().get(CakeId::new(2)).is_none());

    let stored = ctx.stored_lines();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, CakeId::new(4));
}

#[test]
fn test_edits_do_not_touch_cart_snapshots() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    shop.add_to_cart(CakeId::new(1));

    let mut form = CakeForm::editing(shop.catalog().get(CakeId::new(1)).unwrap());
    form.name = "Velvet Dream Deluxe".to_string();
    form.price = "30".to_string();
    let mut prompt = RecordingPrompt::default();
    assert_eq!(shop.submit_form(&form, &mut prompt), Some(CakeId::new(1)));

    let line = shop.cart().line(CakeId::new(1)).unwrap();
    assert_eq!(line.name, "Velvet Dream");
    assert_eq!(line.price, Price::from_cents(2499));

    // Adding again grows the old line rather than taking a new snapshot
    shop.add_to_cart(CakeId::new(1));
    let line = shop.cart().line(CakeId::new(1)).unwrap();
    assert_eq!(line.quantity, 2);
    assert_eq!(line.name, "Velvet Dream");
}

#[test]
fn test_catalog_changes_are_not_persisted() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();

    let mut form = CakeForm::new();
    form.name = "Pavlova".to_string();
    form.price = "abc".to_string();
    form.set_image_url("https://example.com/pavlova.jpg");
    let mut prompt = RecordingPrompt::default();
    let id = shop.submit_form(&form, &mut prompt).unwrap();
    assert_eq!(id, CakeId::new(7));
    assert_eq!(shop.catalog().get(id).unwrap().price, Price::ZERO);

    shop.add_to_cart(id);
    drop(shop);

    // The cart line outlives its cake across a reload
    let shop = ctx.open();
    assert_eq!(shop.catalog().len(), 6);
    assert!(shop.catalog().get(id).is_none());
    assert_eq!(shop.cart().line(id).map(|l| l.name.as_str()), Some("Pavlova"));
}

#[test]
fn test_form_without_image_is_rejected() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    let mut form = CakeForm::new();
    form.name = "Mystery".to_string();

    let mut prompt = RecordingPrompt::default();
    assert_eq!(shop.submit_form(&form, &mut prompt), None);
    assert_eq!(prompt.acknowledgments.len(), 1);
    assert_eq!(shop.catalog().len(), 6);
}

#[tokio::test]
async fn test_image_file_is_embedded() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    let image = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
    std::fs::write(image.path(), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

    let mut form = CakeForm::new();
    form.name = "Opera".to_string();
    form.price = "31.00".to_string();
    form.attach_image_file(image.path(), 1024).await.unwrap();

    let mut prompt = RecordingPrompt::default();
    let id = shop.submit_form(&form, &mut prompt).unwrap();
    let cake = shop.catalog().get(id).unwrap();
    assert_eq!(cake.image_url.as_str(), "data:image/jpeg;base64,/9j/4A==");
    assert!(cake.image_url.is_embedded());
}

// ============================================================================
// Browsing
// ============================================================================

#[test]
fn test_search_and_sort_follow_catalog_changes() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    shop.set_search_term("c");
    shop.set_sort_key(SortKey::PriceDesc);

    let names: Vec<String> = shop.visible_cakes().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names.first().map(String::as_str), Some("Chocolate Decadence"));
    let before = names.len();

    let mut prompt = RecordingPrompt::answering(&[true]);
    shop.delete_cake(CakeId::new(2), &mut prompt);
    let names: Vec<String> = shop.visible_cakes().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names.len(), before - 1);
    assert!(!names.contains(&"Chocolate Decadence".to_string()));
}

#[test]
fn test_detail_view_closes_when_cake_is_deleted() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    assert!(shop.view_details(CakeId::new(4)));
    assert_eq!(shop.selected_cake().map(|c| c.id), Some(CakeId::new(4)));

    shop.set_view(View::Admin);
    assert!(shop.selected_cake().is_none());

    assert!(shop.view_details(CakeId::new(4)));
    let mut prompt = RecordingPrompt::answering(&[true]);
    shop.delete_cake(CakeId::new(4), &mut prompt);
    assert!(shop.selected_cake().is_none());
}
