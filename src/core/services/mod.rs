//! Business logic services
//!
//! Pure computation only: no filesystem, no network. The allocator is the
//! heart of the crate; risk analysis, the baseline forecaster and the impact
//! estimate feed the surrounding commands.

pub mod allocator;
pub mod forecast;
pub mod impact;
pub mod risk;

pub use allocator::{AllocationError, allocate};
pub use forecast::WeekdayBaseline;
pub use impact::{ImpactFactors, estimate_impact, fallback_analysis};
pub use risk::analyze_inventory;
