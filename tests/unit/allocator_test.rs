//! Tests for the surplus allocator's public contract

use replate::core::services::{AllocationError, allocate};

use super::common::{ORIGIN, make_item, make_recipient};

// =============================================================================
// CONSERVATION PROPERTIES
// =============================================================================

#[test]
fn test_item_never_over_assigned() {
    let items = vec![make_item("a", 9.0), make_item("b", 21.0)];
    let recipients = vec![
        make_recipient("r1", 1.0, 8.0),
        make_recipient("r2", 2.0, 8.0),
        make_recipient("r3", 3.0, 8.0),
    ];

    let outcome = allocate(&ORIGIN, &items, &recipients).unwrap();

    for item in &items {
        let assigned: f64 = outcome
            .allocations
            .iter()
            .filter(|a| a.item_id == item.item_id)
            .map(|a| a.quantity_kg)
            .sum();
        assert!(
            assigned <= item.quantity_kg + 1e-9,
            "{} got {assigned} of {}",
            item.item_id,
            item.quantity_kg
        );
    }
}

#[test]
fn test_recipient_never_over_capacity() {
    let items = vec![make_item("a", 30.0), make_item("b", 30.0), make_item("c", 30.0)];
    let recipients = vec![make_recipient("r1", 1.0, 25.0), make_recipient("r2", 2.0, 25.0)];

    let outcome = allocate(&ORIGIN, &items, &recipients).unwrap();

    for r in &recipients {
        assert!(outcome.assigned_to(&r.recipient_id) <= r.capacity_kg + 1e-9);
    }
}

#[test]
fn test_assigned_plus_remainder_equals_input() {
    let items = vec![make_item("a", 12.5), make_item("b", 7.5)];
    let recipients = vec![make_recipient("r1", 1.0, 9.0)];

    let outcome = allocate(&ORIGIN, &items, &recipients).unwrap();
    let input_total: f64 = items.iter().map(|i| i.quantity_kg).sum();

    assert!(
        (outcome.total_assigned_kg() + outcome.total_unallocated_kg() - input_total).abs() < 1e-9
    );
}

// =============================================================================
// SPEC SCENARIOS
// =============================================================================

#[test]
fn test_empty_recipients_returns_full_input() {
    let items = vec![make_item("a", 3.0), make_item("b", 4.0)];
    let outcome = allocate(&ORIGIN, &items, &[]).unwrap();

    assert!(outcome.allocations.is_empty());
    assert_eq!(outcome.unallocated.len(), 2);
    assert_eq!(outcome.unallocated[0].item_id, "a");
    assert_eq!(outcome.unallocated[1].item_id, "b");
}

#[test]
fn test_ten_into_fifteen_single_allocation() {
    let items = vec![make_item("biryani", 10.0)];
    let recipients = vec![make_recipient("shelter", 1.0, 15.0)];

    let outcome = allocate(&ORIGIN, &items, &recipients).unwrap();

    assert_eq!(outcome.allocations.len(), 1);
    assert!((outcome.allocations[0].quantity_kg - 10.0).abs() < 1e-9);
    assert!(outcome.unallocated.is_empty());
}

#[test]
fn test_four_then_six_split() {
    let items = vec![make_item("biryani", 10.0)];
    let recipients = vec![make_recipient("near", 1.0, 4.0), make_recipient("far", 6.0, 10.0)];

    let outcome = allocate(&ORIGIN, &items, &recipients).unwrap();

    assert_eq!(outcome.allocations.len(), 2);
    assert_eq!(outcome.allocations[0].recipient_id, "near");
    assert!((outcome.allocations[0].quantity_kg - 4.0).abs() < 1e-9);
    assert_eq!(outcome.allocations[1].recipient_id, "far");
    assert!((outcome.allocations[1].quantity_kg - 6.0).abs() < 1e-9);
    assert!(outcome.unallocated.is_empty());
}

#[test]
fn test_unverified_never_assigned() {
    let items = vec![make_item("biryani", 10.0)];
    let mut nearest = make_recipient("nearest", 0.1, 100.0);
    nearest.verified = false;
    let recipients = vec![nearest, make_recipient("far", 30.0, 100.0)];

    let outcome = allocate(&ORIGIN, &items, &recipients).unwrap();

    assert!(outcome.allocations.iter().all(|a| a.recipient_id != "nearest"));
    assert!(outcome.unallocated.is_empty());
}

// =============================================================================
// INPUT VALIDATION
// =============================================================================

#[test]
fn test_zero_quantity_rejects_whole_call() {
    let items = vec![make_item("good", 5.0), make_item("bad", 0.0)];
    let recipients = vec![make_recipient("r1", 1.0, 100.0)];

    let err = allocate(&ORIGIN, &items, &recipients).unwrap_err();
    assert!(matches!(
        err,
        AllocationError::NonPositiveQuantity { ref item_id, .. } if item_id == "bad"
    ));
}

#[test]
fn test_nan_quantity_rejected() {
    let items = vec![make_item("bad", f64::NAN)];
    let err = allocate(&ORIGIN, &items, &[]).unwrap_err();
    assert!(matches!(err, AllocationError::NonPositiveQuantity { .. }));
}

#[test]
fn test_negative_capacity_rejects_whole_call() {
    let items = vec![make_item("a", 5.0)];
    let recipients = vec![make_recipient("broken", 1.0, -1.0)];

    let err = allocate(&ORIGIN, &items, &recipients).unwrap_err();
    assert!(matches!(
        err,
        AllocationError::InvalidCapacity { ref recipient_id, .. } if recipient_id == "broken"
    ));
}

#[test]
fn test_error_message_names_the_item() {
    let items = vec![make_item("bad-item", -2.0)];
    let err = allocate(&ORIGIN, &items, &[]).unwrap_err();
    assert!(err.to_string().contains("bad-item"));
}
