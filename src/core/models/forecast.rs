//! Demand forecast model
//!
//! A forecast is a next-day point prediction with a 95% band, plus the
//! training statistics the prediction was derived from. The statistics are
//! reported so an operator can judge how much to trust the band.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Next-day demand forecast for one item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandForecast {
    /// The item forecast
    pub item: String,

    /// The day being predicted (day after the last observation)
    pub for_date: NaiveDate,

    /// Point prediction in kilograms
    pub predicted: f64,

    /// Lower edge of the 95% band, clamped at zero
    pub lower: f64,

    /// Upper edge of the 95% band
    pub upper: f64,

    /// Statistics of the series the forecast was trained on
    pub training: TrainingSummary,
}

impl DemandForecast {
    /// Half-width of the 95% band, in kilograms
    ///
    /// Wider means less certain; operators plan safety stock from this.
    #[must_use]
    pub fn uncertainty(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }
}

/// Statistics of the history an item's forecast was trained on
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Number of observations used
    pub records_used: usize,

    /// Earliest observation date
    pub first_date: NaiveDate,

    /// Latest observation date
    pub last_date: NaiveDate,

    /// Mean daily usage over the whole series
    pub mean: f64,

    /// Sample standard deviation of daily usage
    pub std_dev: f64,

    /// Lowest observed daily usage
    pub min: f64,

    /// Highest observed daily usage
    pub max: f64,
}
