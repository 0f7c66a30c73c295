//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{
    AllocationOutcome, DemandForecast, Recipient, RiskReport, SurplusAnalysis,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an allocation run
#[derive(Debug, Serialize)]
pub struct AllocationResult {
    /// Whether every kilogram found a recipient
    pub fully_allocated: bool,
    /// The allocation outcome as produced by the allocator
    #[serde(flatten)]
    pub outcome: AllocationOutcome,
    /// Total quantity assigned, in kilograms
    pub total_assigned_kg: f64,
    /// Total quantity left unallocated, in kilograms
    pub total_unallocated_kg: f64,
}

impl AllocationResult {
    /// Build a result from an allocator outcome
    #[must_use]
    pub fn from_outcome(outcome: AllocationOutcome) -> Self {
        Self {
            fully_allocated: outcome.unallocated.is_empty(),
            total_assigned_kg: outcome.total_assigned_kg(),
            total_unallocated_kg: outcome.total_unallocated_kg(),
            outcome,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.outcome.allocations.is_empty() && self.outcome.unallocated.is_empty() {
            println!("Nothing to allocate.");
            return;
        }

        if !self.outcome.allocations.is_empty() {
            println!("Allocations:");
            for a in &self.outcome.allocations {
                println!(
                    "  {:8.2} kg  {} -> {}  ({:.1} km)",
                    a.quantity_kg, a.item_id, a.recipient_id, a.distance_km
                );
            }
            println!("  Total: {:.2} kg", self.total_assigned_kg);
        }

        if self.outcome.unallocated.is_empty() {
            println!("\n{}", "All surplus allocated.".green());
        } else {
            println!("\n{}:", "Unallocated".red());
            for item in &self.outcome.unallocated {
                println!("  {:8.2} kg  {} ({})", item.quantity_kg, item.item_id, item.category);
            }
            println!(
                "  {} {:.2} kg could not be placed",
                "Remainder:".red(),
                self.total_unallocated_kg
            );
        }
    }
}

/// Result of a forecast operation
#[derive(Debug, Serialize)]
pub struct ForecastResult {
    /// The forecast itself
    #[serde(flatten)]
    pub forecast: DemandForecast,
}

impl ForecastResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let f = &self.forecast;
        println!("Forecast for {} on {}:", f.item.bold(), f.for_date);
        println!("  Predicted usage: {:.2} kg", f.predicted);
        println!("  95% band: [{:.2}, {:.2}] kg (+/- {:.2})", f.lower, f.upper, f.uncertainty());
        println!(
            "\nTrained on {} record(s), {} to {}",
            f.training.records_used, f.training.first_date, f.training.last_date
        );
        println!(
            "  mean {:.2}  std {:.2}  min {:.2}  max {:.2}",
            f.training.mean, f.training.std_dev, f.training.min, f.training.max
        );
    }
}

/// Result of a risk analysis
#[derive(Debug, Serialize)]
pub struct RiskResult {
    /// The risk report
    #[serde(flatten)]
    pub report: RiskReport,
}

impl RiskResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.report.restock_alerts.is_empty() && self.report.surplus.is_empty() {
            println!("No inventory risk found.");
            return;
        }

        if !self.report.restock_alerts.is_empty() {
            println!("{}:", "Restock alerts".yellow());
            for a in &self.report.restock_alerts {
                println!(
                    "  {}  stock {:.2} kg <= threshold {:.2} kg (avg daily sales {:.2})",
                    a.item.bold(),
                    a.current_stock,
                    a.threshold,
                    a.avg_daily_sales
                );
            }
        }

        if !self.report.surplus.is_empty() {
            println!("{}:", "Surplus candidates".cyan());
            for s in &self.report.surplus {
                println!(
                    "  {}  stock {:.2} kg vs {:.2} kg needed over {} day(s), excess {:.2} kg",
                    s.item.bold(),
                    s.current_stock,
                    s.estimated_need,
                    s.window_days,
                    s.excess_kg()
                );
            }
        }
    }
}

/// Result of a prescriptive analysis
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    /// The item analyzed
    pub item: String,
    /// The surplus quantity analyzed, in kilograms
    pub surplus_kg: f64,
    /// The analysis itself
    #[serde(flatten)]
    pub analysis: SurplusAnalysis,
}

impl AnalysisResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let a = &self.analysis;
        println!("Analysis: {} ({} kg)", self.item.bold(), self.surplus_kg);
        println!("\n  {}", a.reasoning);
        println!("\n  Send to: {}", a.recommended_recipient);
        println!("  Handling: {}", a.handling);
        println!("\n  Impact:");
        println!("    CO2 saved:  {:.1} kg", a.impact.co2_saved_kg);
        println!("    Meals:      {}", a.impact.meals_provided);
        println!("    Cost saved: {:.0}", a.impact.cost_saved);
        println!("\n  Confidence: {}/100", a.confidence);
    }
}

/// Result of a recipient list operation
#[derive(Debug, Serialize)]
pub struct RecipientListResult {
    /// All recipients in the registry
    pub recipients: Vec<Recipient>,
}

impl RecipientListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.recipients.is_empty() {
            println!("No recipients registered.");
            return;
        }

        println!("Recipients:\n");
        for r in &self.recipients {
            let status = if r.verified {
                "verified".green()
            } else {
                "unverified".red()
            };
            let categories: Vec<String> =
                r.accepted_categories.iter().map(ToString::to_string).collect();
            println!("  [{}] {} ({})", r.recipient_id, r.name, status);
            println!("      {} | {:.1} kg capacity", r.location, r.capacity_kg);
            println!("      accepts: {}\n", categories.join(", "));
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
