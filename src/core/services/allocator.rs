//! Surplus allocator - matches surplus items to recipient organizations
//!
//! Greedy nearest-first assignment: for each item, eligible recipients are
//! ranked by distance from the surplus site, closest first, and the item is
//! poured into them until it runs out or they do. Recipient capacity
//! depletes across the whole run, not per item.
//!
//! This is a heuristic, not a min-cost assignment solver; anything it cannot
//! place comes back as data in the remainder, never as an error.

use log::debug;
use thiserror::Error;

use super::super::models::{
    Allocation, AllocationOutcome, GeoPoint, Recipient, SurplusItem,
};

/// Errors that reject an allocation call outright
///
/// Only malformed input is an error. An item no recipient can take is a
/// normal outcome, reported in the remainder.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// An item has zero, negative or non-finite quantity
    #[error("item {item_id} has invalid quantity {quantity_kg} kg; must be positive")]
    NonPositiveQuantity {
        /// The offending item
        item_id: String,
        /// The quantity it carried
        quantity_kg: f64,
    },

    /// A recipient has negative or non-finite capacity
    #[error("recipient {recipient_id} has invalid capacity {capacity_kg} kg; must be >= 0")]
    InvalidCapacity {
        /// The offending recipient
        recipient_id: String,
        /// The capacity it carried
        capacity_kg: f64,
    },
}

/// Allocate surplus items to recipients
///
/// `origin` is the surplus site; recipient distance is measured from it.
/// Items are processed in input order, so the caller controls priority
/// (e.g., most perishable first).
///
/// Rules per item:
/// 1. Only verified recipients that accept the item's category and still
///    have remaining capacity are candidates. A capacity of exactly zero is
///    ineligible, not a tie-break value.
/// 2. Candidates are ranked by distance ascending; ties go to the larger
///    remaining capacity, preferring a single-delivery match.
/// 3. Quantity is assigned greedily up to `min(item remaining, recipient
///    remaining)` until the item is exhausted or candidates run out.
///
/// Items with no eligible recipient, or leftover quantity after all
/// candidates, come back in `unallocated` with the leftover quantity.
pub fn allocate(
    origin: &GeoPoint,
    items: &[SurplusItem],
    recipients: &[Recipient],
) -> Result<AllocationOutcome, AllocationError> {
    validate(items, recipients)?;

    // Distances are fixed for the run; remaining capacity is not.
    let distances: Vec<f64> =
        recipients.iter().map(|r| origin.distance_km(&r.location)).collect();
    let mut remaining: Vec<f64> = recipients.iter().map(|r| r.capacity_kg).collect();

    let mut outcome = AllocationOutcome::default();

    for item in items {
        let mut left = item.quantity_kg;

        let mut candidates: Vec<usize> = recipients
            .iter()
            .enumerate()
            .filter(|(i, r)| r.verified && r.accepts(item.category) && remaining[*i] > 0.0)
            .map(|(i, _)| i)
            .collect();

        candidates.sort_by(|&a, &b| {
            distances[a]
                .total_cmp(&distances[b])
                .then(remaining[b].total_cmp(&remaining[a]))
        });

        for i in candidates {
            if left <= 0.0 {
                break;
            }

            let take = left.min(remaining[i]);
            remaining[i] -= take;
            left -= take;

            debug!(
                "assigned {take:.2} kg of {} to {} ({:.1} km)",
                item.item_id, recipients[i].recipient_id, distances[i]
            );

            outcome.allocations.push(Allocation {
                item_id: item.item_id.clone(),
                recipient_id: recipients[i].recipient_id.clone(),
                quantity_kg: take,
                distance_km: distances[i],
            });
        }

        if left > 0.0 {
            debug!("{:.2} kg of {} left unallocated", left, item.item_id);
            outcome.unallocated.push(item.with_quantity(left));
        }
    }

    Ok(outcome)
}

/// Reject the whole call on any malformed item or recipient
fn validate(items: &[SurplusItem], recipients: &[Recipient]) -> Result<(), AllocationError> {
    for item in items {
        if !(item.quantity_kg > 0.0 && item.quantity_kg.is_finite()) {
            return Err(AllocationError::NonPositiveQuantity {
                item_id: item.item_id.clone(),
                quantity_kg: item.quantity_kg,
            });
        }
    }

    for recipient in recipients {
        if !(recipient.capacity_kg >= 0.0 && recipient.capacity_kg.is_finite()) {
            return Err(AllocationError::InvalidCapacity {
                recipient_id: recipient.recipient_id.clone(),
                capacity_kg: recipient.capacity_kg,
            });
        }
    }

    Ok(())
}
