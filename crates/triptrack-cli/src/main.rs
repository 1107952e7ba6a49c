//! Trip Tracker - employee travel-day logging against a policy allowance
//!
//! A CLI tool that logs business trips to a CSV ledger and reports usage
//! against the annual travel-day policy.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
