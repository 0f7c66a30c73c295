//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use replate::output::OutputMode;

/// replate - route end-of-day food surplus to the people who need it
#[derive(Parser, Debug)]
#[command(
    name = "replate",
    version,
    about = "Forecast demand, flag inventory risk, route surplus food",
    long_about = "End-of-day surplus management for restaurants and cloud kitchens.\n\n\
                  Forecasts next-day demand from usage history, flags restock and\n\
                  surplus risk, and allocates finalized surplus to verified recipient\n\
                  organizations by proximity and capacity."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize replate in the current directory
    Init {
        /// Force re-initialization
        #[arg(short, long)]
        force: bool,
    },

    /// Forecast next-day demand for an item from usage history
    Forecast {
        /// Usage history CSV (date,item,quantity[,waste_pct])
        history: PathBuf,

        /// Item to forecast
        #[arg(short, long)]
        item: String,
    },

    /// Flag restock alerts and surplus candidates
    Risk {
        /// Usage history CSV (date,item,quantity[,waste_pct])
        history: PathBuf,

        /// Inventory snapshot CSV (item,stock,threshold)
        inventory: PathBuf,
    },

    /// Allocate finalized surplus to recipient organizations
    ///
    /// Exits nonzero when any quantity is left unallocated, so close-out
    /// scripts notice.
    Allocate {
        /// Surplus items JSON produced at close-out
        surplus: PathBuf,

        /// Recipient registry file (defaults to the configured one)
        #[arg(long)]
        recipients: Option<PathBuf>,
    },

    /// Prescriptive analysis for one surplus item
    Analyze {
        /// Item name
        item: String,

        /// Surplus quantity in kilograms
        kg: f64,
    },

    /// Manage the recipient registry
    Recipients {
        #[command(subcommand)]
        action: RecipientAction,
    },

    /// Show version
    Version,
}

/// Actions on the recipient registry
#[derive(Subcommand, Debug)]
pub enum RecipientAction {
    /// Add a recipient organization
    Add {
        /// Unique identifier (e.g., "akshaya-patra")
        id: String,

        /// Organization name
        #[arg(short, long)]
        name: String,

        /// Latitude in degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long)]
        lng: f64,

        /// Capacity per run in kilograms
        #[arg(short, long)]
        capacity: f64,

        /// Accepted categories, comma-separated
        #[arg(long, default_value = "prepared")]
        categories: String,

        /// Mark as verified immediately
        #[arg(long)]
        verified: bool,
    },

    /// List recipients
    List,

    /// Remove a recipient
    Remove {
        /// Recipient ID
        id: String,
    },

    /// Mark a recipient as verified
    Verify {
        /// Recipient ID
        id: String,

        /// Revoke verification instead
        #[arg(long)]
        revoke: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Forecast { history, item }) => {
            commands::forecast(&history, &item, output_mode)
        },
        Some(Command::Risk { history, inventory }) => {
            commands::risk(&history, &inventory, output_mode)
        },
        Some(Command::Allocate {
            surplus,
            recipients,
        }) => commands::allocate(&surplus, recipients.as_deref(), output_mode),
        Some(Command::Analyze { item, kg }) => commands::analyze(&item, kg, output_mode),
        Some(Command::Recipients { action }) => commands::recipients(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("replate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("replate v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'replate --help' for usage");
                println!("Run 'replate init' to get started");
            }
            Ok(())
        },
    }
}
