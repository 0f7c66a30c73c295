//! Inventory risk models
//!
//! Two findings come out of a risk pass: items at or below their restock
//! threshold, and items holding more stock than the coming window needs.

use serde::{Deserialize, Serialize};

/// An item at or below its restock threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockAlert {
    /// Item name
    pub item: String,

    /// Quantity currently on hand, in kilograms
    pub current_stock: f64,

    /// The threshold the stock fell to or below
    pub threshold: f64,

    /// Average daily sales observed in the history
    pub avg_daily_sales: f64,
}

/// An item holding more stock than the projected need
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurplusCandidate {
    /// Item name
    pub item: String,

    /// Quantity currently on hand, in kilograms
    pub current_stock: f64,

    /// Projected need over the window, in kilograms
    pub estimated_need: f64,

    /// The projection window in days
    pub window_days: u32,
}

impl SurplusCandidate {
    /// Stock in excess of the projected need, in kilograms
    #[must_use]
    pub fn excess_kg(&self) -> f64 {
        self.current_stock - self.estimated_need
    }
}

/// The combined result of one risk pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskReport {
    /// Items needing restock
    pub restock_alerts: Vec<RestockAlert>,

    /// Items with likely surplus
    pub surplus: Vec<SurplusCandidate>,
}
