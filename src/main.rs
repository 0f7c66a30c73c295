//! replate - end-of-day food surplus management for restaurants and cloud
//! kitchens
//!
//! This binary forecasts next-day demand, flags inventory risk, and routes
//! finalized surplus to verified recipient organizations by proximity and
//! capacity.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the replate CLI
fn main() {
    if let Err(e) = cli::app::run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
