//! Adapters binding the core ports to concrete media
//!
//! - `csv/` - usage history and inventory snapshot ingestion
//! - `toml/` - recipients.toml registry
//! - `llm/` - hosted-model summarizer (feature `llm`)

pub mod csv;
#[cfg(feature = "llm")]
pub mod llm;
pub mod toml;
