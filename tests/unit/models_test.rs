//! Tests for core domain models

use replate::core::models::{
    Allocation, AllocationOutcome, Category, GeoPoint, SurplusItem,
};

use super::common::make_recipient;

// =============================================================================
// SURPLUS ITEM TESTS
// =============================================================================

#[test]
fn test_with_quantity_keeps_identity() {
    let item = SurplusItem::new(
        "biryani".to_string(),
        "Chicken Biryani".to_string(),
        Category::Prepared,
        10.0,
        6,
    );

    let leftover = item.with_quantity(3.5);
    assert_eq!(leftover.item_id, "biryani");
    assert_eq!(leftover.name, "Chicken Biryani");
    assert_eq!(leftover.produced_at, item.produced_at);
    assert!((leftover.quantity_kg - 3.5).abs() < 1e-9);
}

#[test]
fn test_expires_at_adds_window() {
    let mut item = SurplusItem::new(
        "biryani".to_string(),
        "Chicken Biryani".to_string(),
        Category::Prepared,
        10.0,
        6,
    );
    item.produced_at = "2025-06-02T18:00:00Z".to_string();

    let expires = item.expires_at().unwrap();
    assert_eq!(expires.to_rfc3339(), "2025-06-03T00:00:00+00:00");
}

#[test]
fn test_expires_at_bad_timestamp_is_none() {
    let mut item = SurplusItem::new(
        "biryani".to_string(),
        "Chicken Biryani".to_string(),
        Category::Prepared,
        10.0,
        6,
    );
    item.produced_at = "yesterday evening".to_string();
    assert!(item.expires_at().is_none());
}

#[test]
fn test_surplus_item_json_round_trip() {
    let item = SurplusItem::new(
        "biryani".to_string(),
        "Chicken Biryani".to_string(),
        Category::Prepared,
        10.0,
        6,
    );

    let json = serde_json::to_string(&item).unwrap();
    let back: SurplusItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back.item_id, item.item_id);
    assert_eq!(back.category, Category::Prepared);
}

// =============================================================================
// RECIPIENT TESTS
// =============================================================================

#[test]
fn test_recipient_accepts_listed_category() {
    let recipient = make_recipient("shelter", 1.0, 50.0);
    assert!(recipient.accepts(Category::Prepared));
    assert!(!recipient.accepts(Category::Meat));
}

// =============================================================================
// OUTCOME ACCESSORS
// =============================================================================

#[test]
fn test_outcome_totals() {
    let outcome = AllocationOutcome {
        allocations: vec![
            Allocation {
                item_id: "a".to_string(),
                recipient_id: "r1".to_string(),
                quantity_kg: 4.0,
                distance_km: 1.0,
            },
            Allocation {
                item_id: "a".to_string(),
                recipient_id: "r2".to_string(),
                quantity_kg: 6.0,
                distance_km: 2.0,
            },
        ],
        unallocated: vec![],
    };

    assert!((outcome.total_assigned_kg() - 10.0).abs() < 1e-9);
    assert!((outcome.assigned_to("r1") - 4.0).abs() < 1e-9);
    assert!((outcome.assigned_to("r2") - 6.0).abs() < 1e-9);
    assert!(outcome.assigned_to("r3").abs() < 1e-9);
}

// =============================================================================
// GEO TESTS
// =============================================================================

#[test]
fn test_geo_display_precision() {
    let p = GeoPoint::new(12.9716, 77.5946);
    assert_eq!(p.to_string(), "(12.97160, 77.59460)");
}
