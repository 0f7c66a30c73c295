//! Core domain logic for replate
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (SurplusItem, Recipient, Allocation, forecasts)
//! - `services/` - Business logic (allocator, risk analysis, baseline forecast)
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
