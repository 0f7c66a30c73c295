//! Allocation model
//!
//! An allocation assigns part of a surplus item to one recipient. Only the
//! allocator creates these; at assignment time the quantity never exceeds
//! the item's remaining quantity or the recipient's remaining capacity.

use serde::{Deserialize, Serialize};

use super::SurplusItem;

/// A single item-to-recipient assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    /// The surplus item being assigned
    pub item_id: String,

    /// The receiving organization
    pub recipient_id: String,

    /// Quantity assigned in kilograms
    pub quantity_kg: f64,

    /// Distance from the surplus site to the recipient in kilometers
    pub distance_km: f64,
}

/// The result of one allocation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Assignments in the order they were made
    pub allocations: Vec<Allocation>,

    /// Items (or leftover parts of items) no eligible recipient could take
    pub unallocated: Vec<SurplusItem>,
}

impl AllocationOutcome {
    /// Total quantity assigned across all allocations, in kilograms
    #[must_use]
    pub fn total_assigned_kg(&self) -> f64 {
        self.allocations.iter().map(|a| a.quantity_kg).sum()
    }

    /// Total quantity left unallocated, in kilograms
    #[must_use]
    pub fn total_unallocated_kg(&self) -> f64 {
        self.unallocated.iter().map(|i| i.quantity_kg).sum()
    }

    /// Quantity assigned to one recipient across the run, in kilograms
    #[must_use]
    pub fn assigned_to(&self, recipient_id: &str) -> f64 {
        self.allocations
            .iter()
            .filter(|a| a.recipient_id == recipient_id)
            .map(|a| a.quantity_kg)
            .sum()
    }
}
