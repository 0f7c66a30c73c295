//! Surplus item model
//!
//! A surplus item is a quantity of unsold food identified at end-of-day
//! close-out. Once finalized it is immutable; the allocator reads it and
//! reports any leftover as a reduced-quantity copy.

use serde::{Deserialize, Serialize};

use super::Category;

/// A finalized quantity of surplus food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurplusItem {
    /// Unique identifier within the close-out run
    pub item_id: String,

    /// Human-readable item name (e.g., "Chicken Biryani")
    pub name: String,

    /// Food category (drives recipient acceptance)
    pub category: Category,

    /// Quantity in kilograms; must be positive
    pub quantity_kg: f64,

    /// Hours the item stays safe to redistribute after production
    pub perishability_hours: u32,

    /// When the item was produced (RFC3339)
    pub produced_at: String,
}

impl SurplusItem {
    /// Create a surplus item produced now
    #[must_use]
    pub fn new(
        item_id: String,
        name: String,
        category: Category,
        quantity_kg: f64,
        perishability_hours: u32,
    ) -> Self {
        Self {
            item_id,
            name,
            category,
            quantity_kg,
            perishability_hours,
            produced_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// A copy of this item carrying only the given leftover quantity
    #[must_use]
    pub fn with_quantity(&self, quantity_kg: f64) -> Self {
        Self {
            quantity_kg,
            ..self.clone()
        }
    }

    /// When the item stops being safe to redistribute
    ///
    /// Returns `None` if `produced_at` is not a valid RFC3339 timestamp.
    #[must_use]
    pub fn expires_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let produced = chrono::DateTime::parse_from_rfc3339(&self.produced_at).ok()?;
        Some(produced.with_timezone(&chrono::Utc) + chrono::Duration::hours(i64::from(self.perishability_hours)))
    }
}
