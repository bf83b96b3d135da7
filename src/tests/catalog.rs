use serde_json::json;

use crate::api::cosmetics::schema::Response;
use crate::catalog::{CatalogItem, IconSet, build};
use crate::rarity;

fn response(br: serde_json::Value) -> Response {
    serde_json::from_value(json!({ "data": { "br": br } }))
        .expect("Invalid fixture")
}

fn item(id: &str, rarity: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: String::new(),
        rarity: rarity.to_string(),
        files: IconSet::default()
    }
}

#[test]
fn test_routing() {
    let response = response(json!([
        {
            "id": "CID_001",
            "name": { "en": "Recruit" },
            "type": { "value": "outfit" },
            "rarity": { "displayValue": "Legendary" },
            "images": { "icon": "https://example.com/cid_001.png" }
        },
        {
            "id": "Pickaxe_001",
            "name": { "en": "Default Pickaxe" },
            "type": { "value": "pickaxe" },
            "rarity": { "displayValue": "Common" },
            "images": {}
        }
    ]));

    let items = build(response, "en");

    assert_eq!(items.outfits.len(), 1);
    assert_eq!(items.pickaxes.len(), 1);

    assert_eq!(items.outfits[0].id, "CID_001");
    assert_eq!(items.outfits[0].rarity, "Legendary");
    assert_eq!(items.outfits[0].files.big_icon.as_deref(), Some("https://example.com/cid_001.png"));

    assert_eq!(items.pickaxes[0].id, "Pickaxe_001");
    assert_eq!(items.pickaxes[0].rarity, "Common");

    assert_eq!(items.len(), 2);
}

#[test]
fn test_unknown_type_dropped() {
    let response = response(json!([
        {
            "id": "Banner_001",
            "name": { "en": "Banner" },
            "type": { "value": "banner" },
            "rarity": { "displayValue": "Common" }
        }
    ]));

    assert!(build(response, "en").is_empty());
}

#[test]
fn test_name_localization_fallback() {
    let response = response(json!([
        {
            "id": "CID_001",
            "name": { "en": "Recruit", "de": "Rekrut" },
            "type": { "value": "outfit" },
            "rarity": { "displayValue": "Common" }
        },
        {
            "id": "CID_002",
            "name": { "en": "Ranger" },
            "type": { "value": "outfit" },
            "rarity": { "displayValue": "Common" }
        }
    ]));

    let items = build(response, "de");

    assert_eq!(items.outfits[0].name, "Rekrut");

    // No german name, so the default language name is taken
    assert_eq!(items.outfits[1].name, "Ranger");
}

#[test]
fn test_sort_by_rarity_then_id() {
    let mut items = vec![
        item("B", "Common"),
        item("A", "Common"),
        item("Z", "Mythic"),
        item("M", "Unheard Of Series"),
        item("C", "Legendary")
    ];

    rarity::sort_items(&mut items);

    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();

    // Mythic first, unknown rarity last, ties broken by id
    assert_eq!(ids, ["Z", "C", "A", "B", "M"]);

    for pair in items.windows(2) {
        assert!(rarity::rank(&pair[0].rarity) <= rarity::rank(&pair[1].rarity));
    }
}

#[test]
fn test_build_is_deterministic() {
    let fixture = json!([
        {
            "id": "CID_010",
            "name": { "en": "Second" },
            "type": { "value": "outfit" },
            "rarity": { "displayValue": "Epic" }
        },
        {
            "id": "CID_005",
            "name": { "en": "First" },
            "type": { "value": "outfit" },
            "rarity": { "displayValue": "Epic" }
        }
    ]);

    let first = build(response(fixture.clone()), "en");
    let second = build(response(fixture), "en");

    assert_eq!(first, second);
    assert_eq!(first.outfits[0].id, "CID_005");
}
