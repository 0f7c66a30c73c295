//! Recipient organization model
//!
//! A recipient is an organization eligible to receive donated surplus.
//! Only verified recipients are ever assigned food.

use serde::{Deserialize, Serialize};

use super::{Category, GeoPoint};

/// An organization that can receive surplus food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    /// Unique identifier (e.g., "akshaya-patra")
    pub recipient_id: String,

    /// Organization name
    pub name: String,

    /// Pickup/delivery location
    pub location: GeoPoint,

    /// Maximum quantity acceptable per allocation run, in kilograms
    pub capacity_kg: f64,

    /// Categories this organization accepts
    #[serde(default)]
    pub accepted_categories: Vec<Category>,

    /// Whether the organization has been verified; unverified recipients
    /// are never assigned food
    #[serde(default)]
    pub verified: bool,
}

impl Recipient {
    /// Whether this recipient accepts the given category
    #[must_use]
    pub fn accepts(&self, category: Category) -> bool {
        self.accepted_categories.contains(&category)
    }
}
