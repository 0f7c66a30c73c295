//! Forecast next-day demand for one item

use std::path::Path;

use anyhow::Context;

use replate::adapters::csv::load_history;
use replate::core::ports::Forecaster;
use replate::core::services::WeekdayBaseline;
use replate::output::{ForecastResult, OutputMode};

/// Forecast the day after the last observation in the history file
pub fn forecast(history: &Path, item: &str, mode: OutputMode) -> anyhow::Result<()> {
    let records = load_history(history)
        .with_context(|| format!("loading history from {}", history.display()))?;

    let forecast = WeekdayBaseline.forecast_next_day(&records, item)?;

    ForecastResult { forecast }.render(mode);
    Ok(())
}
