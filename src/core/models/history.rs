//! Cleaned history and inventory rows
//!
//! These are the in-memory forms of the ingested CSV data: one usage record
//! per item per day, and one stock level per item in the current snapshot.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One day's usage of one item, after cleaning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    /// The day this usage was recorded
    pub date: NaiveDate,

    /// Item name, trimmed and whitespace-collapsed
    pub item: String,

    /// Quantity used/sold that day, in kilograms
    pub quantity: f64,

    /// Share of the item wasted that day, in percent (median-filled)
    pub waste_pct: f64,

    /// Whether the day falls on a Saturday or Sunday
    pub is_weekend: bool,
}

impl UsageRecord {
    /// Day of week for this record
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Current stock of one item against its restock threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLevel {
    /// Item name, trimmed and whitespace-collapsed
    pub item: String,

    /// Quantity currently on hand, in kilograms (missing values read as 0)
    pub stock: f64,

    /// Restock threshold in kilograms
    pub threshold: f64,
}
