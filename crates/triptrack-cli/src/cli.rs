//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use triptrack_types::OutputFormat;

#[derive(Parser)]
#[command(name = "trip-tracker")]
#[command(author = "arrowship")]
#[command(version)]
#[command(about = "Track employee business-travel days against the annual policy allowance")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Your email, checked against the authorized-email list
    #[arg(long, short = 'u', global = true)]
    pub user: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Ledger CSV file (overrides config)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a new trip
    Add {
        /// Employee name
        employee: String,

        /// Travel start date (YYYY-MM-DD)
        #[arg(long, short = 's')]
        start: NaiveDate,

        /// Travel end date (YYYY-MM-DD)
        #[arg(long, short = 'e')]
        end: NaiveDate,

        /// Employee email (optional)
        #[arg(long)]
        email: Option<String>,

        /// Route (e.g. "ATH-SIN-ATH")
        #[arg(long, short = 'r')]
        route: Option<String>,
    },

    /// Show the travel usage dashboard
    Summary {
        /// Compute "days since policy start" against this date instead of today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// List all logged trips
    List {
        /// Limit number of trips shown
        #[arg(long, short = 'n', default_value = "50")]
        limit: usize,
    },

    /// Write the current ledger to another CSV file
    Export {
        /// Output CSV file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the ledger CSV file path
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set the policy start date (YYYY-MM-DD)
        #[arg(long)]
        set_policy_start: Option<NaiveDate>,

        /// Set the policy allowance in days
        #[arg(long)]
        set_policy_limit: Option<i64>,

        /// Set the per-employee close-to-limit threshold in days
        #[arg(long)]
        set_warn_threshold: Option<i64>,

        /// Add an email to the authorized list
        #[arg(long)]
        add_email: Option<String>,

        /// Remove an email from the authorized list
        #[arg(long)]
        remove_email: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
