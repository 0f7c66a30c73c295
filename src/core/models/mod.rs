//! Data models for replate
//!
//! Core abstractions:
//! - `SurplusItem`: "What is left over at close-out" (quantity + shelf life)
//! - `Recipient`: "Who may receive it" (location, capacity, acceptance rules)
//! - `Allocation`: "Who gets how much" (produced only by the allocator)
//! - Forecast/risk/analysis types mirror what the reporting surface shows

pub mod allocation;
pub mod analysis;
pub mod category;
pub mod forecast;
pub mod geo;
pub mod history;
pub mod recipient;
pub mod risk;
pub mod surplus;

pub use allocation::{Allocation, AllocationOutcome};
pub use analysis::{ImpactMetrics, SurplusAnalysis};
pub use category::Category;
pub use forecast::{DemandForecast, TrainingSummary};
pub use geo::GeoPoint;
pub use history::{StockLevel, UsageRecord};
pub use recipient::Recipient;
pub use risk::{RestockAlert, RiskReport, SurplusCandidate};
pub use surplus::SurplusItem;
