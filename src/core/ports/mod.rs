//! Port traits for external dependencies
//!
//! The core never talks to files, networks or models directly; it goes
//! through these seams. Adapters implement them against concrete media.

pub mod forecaster;
pub mod registry;
pub mod summarizer;

pub use forecaster::{ForecastError, Forecaster};
pub use registry::{RecipientRegistry, RegistryError};
pub use summarizer::{Summarizer, SummarizerError};
