//! Weekday-baseline forecaster
//!
//! Built-in implementation of the `Forecaster` port. The point prediction
//! is the mean of past observations on the target weekday (usage in a
//! kitchen swings hard between weekdays and weekends), falling back to the
//! overall mean when that weekday has never been observed. The 95% band is
//! the point plus/minus 1.96 sample standard deviations of the whole
//! series, with the lower edge clamped at zero.

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;

use super::super::models::{DemandForecast, TrainingSummary, UsageRecord};
use super::super::ports::{ForecastError, Forecaster};

/// Forecaster using per-weekday means with a standard-deviation band
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekdayBaseline;

impl Forecaster for WeekdayBaseline {
    #[allow(clippy::cast_precision_loss)]
    fn forecast_next_day(
        &self,
        history: &[UsageRecord],
        item: &str,
    ) -> Result<DemandForecast, ForecastError> {
        let mut series: Vec<(NaiveDate, f64)> = history
            .iter()
            .filter(|r| r.item == item)
            .map(|r| (r.date, r.quantity))
            .collect();

        if series.is_empty() {
            return Err(ForecastError::UnknownItem(item.to_string()));
        }
        if series.len() < 2 {
            return Err(ForecastError::NotEnoughHistory {
                item: item.to_string(),
                records: series.len(),
            });
        }

        series.sort_by_key(|(date, _)| *date);

        let first_date = series[0].0;
        let last_date = series[series.len() - 1].0;
        let for_date = last_date + Duration::days(1);

        let values: Vec<f64> = series.iter().map(|(_, q)| *q).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let std_dev = sample_std_dev(&values, mean);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let target_weekday = for_date.weekday();
        let weekday_values: Vec<f64> = series
            .iter()
            .filter(|(date, _)| date.weekday() == target_weekday)
            .map(|(_, q)| *q)
            .collect();

        let predicted = if weekday_values.is_empty() {
            debug!("no {target_weekday} observations for {item}, using overall mean");
            mean
        } else {
            weekday_values.iter().sum::<f64>() / weekday_values.len() as f64
        };

        Ok(DemandForecast {
            item: item.to_string(),
            for_date,
            predicted,
            lower: (predicted - 1.96 * std_dev).max(0.0),
            upper: predicted + 1.96 * std_dev,
            training: TrainingSummary {
                records_used: series.len(),
                first_date,
                last_date,
                mean,
                std_dev,
                min,
                max,
            },
        })
    }
}

/// Sample standard deviation (n-1 denominator)
#[allow(clippy::cast_precision_loss)]
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    var.sqrt()
}
