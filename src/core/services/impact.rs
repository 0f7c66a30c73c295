//! Deterministic impact estimation
//!
//! Local stand-in for the summarizer's impact figures, and the fallback the
//! LLM adapter uses when a reply cannot be parsed. Factors are per-kilogram
//! scalars and configurable.

use super::super::models::{ImpactMetrics, SurplusAnalysis};

/// Per-kilogram impact factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactFactors {
    /// CO2-equivalent emissions avoided per kilogram redistributed
    pub co2_per_kg: f64,
    /// Meals provided per kilogram
    pub meals_per_kg: f64,
    /// Purchase cost recovered per kilogram
    pub cost_per_kg: f64,
}

impl Default for ImpactFactors {
    fn default() -> Self {
        Self {
            co2_per_kg: 2.5,
            meals_per_kg: 10.0,
            cost_per_kg: 250.0,
        }
    }
}

/// Estimate the impact of redistributing a quantity of food
#[must_use]
pub fn estimate_impact(surplus_kg: f64, factors: &ImpactFactors) -> ImpactMetrics {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let meals = (surplus_kg * factors.meals_per_kg).max(0.0).floor() as u32;

    ImpactMetrics {
        co2_saved_kg: surplus_kg * factors.co2_per_kg,
        meals_provided: meals,
        cost_saved: surplus_kg * factors.cost_per_kg,
    }
}

/// Analysis produced without a model: impact figures only, flagged for
/// manual review with zero confidence
#[must_use]
pub fn fallback_analysis(item: &str, surplus_kg: f64, factors: &ImpactFactors) -> SurplusAnalysis {
    SurplusAnalysis {
        reasoning: format!("No model analysis available for {surplus_kg} kg of {item}"),
        recommended_recipient: "Manual review required".to_string(),
        impact: estimate_impact(surplus_kg, factors),
        handling: "Contact the kitchen manager for handling instructions".to_string(),
        confidence: 0,
    }
}
