//! Prescriptive analysis model
//!
//! The structured answer to "what should we do with this surplus?". Comes
//! either from the LLM summarizer or from the deterministic local estimate.

use serde::{Deserialize, Serialize};

/// Structured action plan for one surplus item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurplusAnalysis {
    /// Why the surplus likely occurred
    pub reasoning: String,

    /// Which organization should receive the food
    pub recommended_recipient: String,

    /// Environmental and social impact of redistributing instead of discarding
    pub impact: ImpactMetrics,

    /// Safety and logistics instructions (temperature, shelf life, transport)
    pub handling: String,

    /// Confidence in the recommendation, 0-100
    pub confidence: u8,
}

/// Estimated impact of redistributing a quantity of food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetrics {
    /// CO2-equivalent emissions avoided, in kilograms
    pub co2_saved_kg: f64,

    /// Number of meals the quantity provides
    pub meals_provided: u32,

    /// Purchase cost recovered as donation value
    pub cost_saved: f64,
}
