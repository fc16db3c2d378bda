use serde_json::json;

use super::*;

fn full_entry() -> Value {
    json!({
        "id": 6_789_012_345_678_i64,
        "title": "Cold Brew Concentrate",
        "body_html": "<p>Smooth <strong>and</strong> bold.</p><p>Makes 8 cups.</p>",
        "images": [
            {"id": 1, "src": "https://cdn.example.com/a.jpg"},
            {"id": 2, "src": "https://cdn.example.com/b.jpg"}
        ],
        "variants": [
            {"id": 11, "title": "32oz", "price": "24.00", "sku": "CB-32"},
            {"id": 12, "title": "64oz", "price": "40.00", "sku": "CB-64"}
        ]
    })
}

#[test]
fn normalizes_full_entry() {
    let product = normalize_entry(&full_entry()).expect("normalized");
    assert_eq!(product.id, "6789012345678");
    assert_eq!(product.title, "Cold Brew Concentrate");
    assert_eq!(product.description, "Smooth and bold. Makes 8 cups.");
    assert_eq!(product.price, "24.00");
    assert_eq!(
        product.images,
        vec![
            "https://cdn.example.com/a.jpg".to_string(),
            "https://cdn.example.com/b.jpg".to_string()
        ]
    );
    assert_eq!(product.variants.len(), 2);
}

#[test]
fn variants_pass_through_verbatim() {
    let product = normalize_entry(&full_entry()).expect("normalized");
    assert_eq!(product.variants[1]["sku"], json!("CB-64"));
    assert_eq!(product.variants[1]["id"], json!(12));
}

#[test]
fn string_id_and_numeric_price_are_stringified() {
    let entry = json!({
        "id": "gid-42",
        "title": "Mug",
        "variants": [{"price": 12.5}]
    });
    let product = normalize_entry(&entry).expect("normalized");
    assert_eq!(product.id, "gid-42");
    assert_eq!(product.price, "12.5");
}

#[test]
fn missing_fields_take_empty_defaults() {
    let product = normalize_entry(&json!({})).expect("normalized");
    assert_eq!(product.id, "");
    assert_eq!(product.title, "");
    assert_eq!(product.description, "");
    assert_eq!(product.price, "0");
    assert!(product.images.is_empty());
    assert!(product.variants.is_empty());
}

#[test]
fn null_collections_are_treated_as_empty() {
    let entry = json!({"id": 1, "title": "Tote", "images": null, "variants": null, "body_html": null});
    let product = normalize_entry(&entry).expect("normalized");
    assert!(product.images.is_empty());
    assert_eq!(product.price, "0");
}

#[test]
fn description_truncated_to_500_chars() {
    let long = "x".repeat(800);
    let entry = json!({"id": 1, "title": "Long", "body_html": format!("<p>{long}</p>")});
    let product = normalize_entry(&entry).expect("normalized");
    assert_eq!(product.description.chars().count(), 500);
}

#[test]
fn images_without_src_are_dropped() {
    let entry = json!({"id": 1, "images": [{"id": 9}, {"src": ""}, {"src": "https://cdn.example.com/c.png"}]});
    let product = normalize_entry(&entry).expect("normalized");
    assert_eq!(product.images, vec!["https://cdn.example.com/c.png".to_string()]);
}

#[test]
fn non_object_entry_is_skipped() {
    assert!(normalize_entry(&json!("not a product")).is_none());
    assert!(normalize_entry(&json!({"title": 42})).is_none());
}
