//! Inventory risk analysis
//!
//! Walks the current stock snapshot against usage history and reports two
//! findings: items at or below their restock threshold, and items holding
//! more stock than the coming window of days will plausibly use.

use std::collections::HashMap;

use log::info;

use super::super::models::{RestockAlert, RiskReport, StockLevel, SurplusCandidate, UsageRecord};

/// Analyze an inventory snapshot for restock and surplus risk
///
/// An item's average daily sales is the mean of its history records; items
/// absent from history average zero and can only trigger restock alerts,
/// never surplus.
#[must_use]
pub fn analyze_inventory(
    inventory: &[StockLevel],
    history: &[UsageRecord],
    window_days: u32,
) -> RiskReport {
    let avg_sales = average_daily_sales(history);
    let mut report = RiskReport::default();

    for level in inventory {
        let avg = avg_sales.get(level.item.as_str()).copied().unwrap_or(0.0);

        if level.stock <= level.threshold {
            report.restock_alerts.push(RestockAlert {
                item: level.item.clone(),
                current_stock: level.stock,
                threshold: level.threshold,
                avg_daily_sales: avg,
            });
        }

        let estimated_need = avg * f64::from(window_days);
        if avg > 0.0 && level.stock > estimated_need {
            report.surplus.push(SurplusCandidate {
                item: level.item.clone(),
                current_stock: level.stock,
                estimated_need,
                window_days,
            });
        }
    }

    info!(
        "risk pass: {} restock alert(s), {} surplus candidate(s) across {} item(s)",
        report.restock_alerts.len(),
        report.surplus.len(),
        inventory.len()
    );

    report
}

/// Mean daily quantity per item over the whole history
#[allow(clippy::cast_precision_loss)]
fn average_daily_sales(history: &[UsageRecord]) -> HashMap<&str, f64> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in history {
        let entry = sums.entry(record.item.as_str()).or_insert((0.0, 0));
        entry.0 += record.quantity;
        entry.1 += 1;
    }

    sums.into_iter().map(|(item, (sum, n))| (item, sum / n as f64)).collect()
}
