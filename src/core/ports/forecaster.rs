//! Forecaster port
//!
//! Defines the interface for next-day demand prediction. The built-in
//! weekday baseline implements it; a heavier external model can be swapped
//! in behind the same trait.

use thiserror::Error;

use super::super::models::{DemandForecast, UsageRecord};

/// Errors that can occur when producing a forecast
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The history contains no records for the requested item
    #[error("no history for item: {0}")]
    UnknownItem(String),

    /// Too few records to estimate the spread
    #[error("not enough history for {item}: {records} record(s), need at least 2")]
    NotEnoughHistory {
        /// The item that was requested
        item: String,
        /// How many usable records were found
        records: usize,
    },
}

/// Produces next-day demand forecasts from usage history
pub trait Forecaster: Send + Sync {
    /// Forecast the day after the last observation for one item
    fn forecast_next_day(
        &self,
        history: &[UsageRecord],
        item: &str,
    ) -> Result<DemandForecast, ForecastError>;
}
