//! Tests for output result structures

use replate::core::models::{Allocation, AllocationOutcome};
use replate::core::services::{ImpactFactors, allocate, fallback_analysis};
use replate::output::{AllocationResult, AnalysisResult};

use super::common::{ORIGIN, make_item, make_recipient};

#[test]
fn test_allocation_result_totals() {
    let outcome = AllocationOutcome {
        allocations: vec![Allocation {
            item_id: "a".to_string(),
            recipient_id: "r1".to_string(),
            quantity_kg: 4.0,
            distance_km: 1.2,
        }],
        unallocated: vec![make_item("b", 2.0)],
    };

    let result = AllocationResult::from_outcome(outcome);
    assert!(!result.fully_allocated);
    assert!((result.total_assigned_kg - 4.0).abs() < 1e-9);
    assert!((result.total_unallocated_kg - 2.0).abs() < 1e-9);
}

#[test]
fn test_allocation_result_json_shape() {
    let items = vec![make_item("biryani", 10.0)];
    let recipients = vec![make_recipient("shelter", 1.0, 15.0)];
    let outcome = allocate(&ORIGIN, &items, &recipients).unwrap();

    let result = AllocationResult::from_outcome(outcome);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["fully_allocated"], true);
    assert_eq!(json["allocations"][0]["item_id"], "biryani");
    assert_eq!(json["allocations"][0]["recipient_id"], "shelter");
    assert!(json["unallocated"].as_array().unwrap().is_empty());
}

#[test]
fn test_analysis_result_json_shape() {
    let analysis = fallback_analysis("Paneer", 5.0, &ImpactFactors::default());
    let result = AnalysisResult {
        item: "Paneer".to_string(),
        surplus_kg: 5.0,
        analysis,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["item"], "Paneer");
    assert_eq!(json["confidence"], 0);
    assert_eq!(json["impact"]["meals_provided"], 50);
}
