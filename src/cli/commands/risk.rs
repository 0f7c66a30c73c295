//! Flag restock alerts and surplus candidates

use std::path::Path;

use anyhow::Context;

use replate::adapters::csv::{load_history, load_inventory};
use replate::config::Config;
use replate::core::services::analyze_inventory;
use replate::output::{OutputMode, RiskResult};

/// Run a risk pass over an inventory snapshot
pub fn risk(history: &Path, inventory: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load()?;

    let records = load_history(history)
        .with_context(|| format!("loading history from {}", history.display()))?;
    let levels = load_inventory(inventory)
        .with_context(|| format!("loading inventory from {}", inventory.display()))?;

    let report = analyze_inventory(&levels, &records, config.risk.surplus_window_days);

    RiskResult { report }.render(mode);
    Ok(())
}
