//! Command handlers

use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use triptrack_domain::model::TravelPolicy;
use triptrack_domain::repository::LedgerRepository;
use triptrack_domain::service::{summarize, usage_report};
use triptrack_infra::persistence::CsvLedgerRepository;
use triptrack_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::{output_summary, output_trip_list};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref path) = cli.data_file {
        config.data_file = Some(path.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        // Config management stays reachable even when the caller is not on
        // the allow-list, otherwise a bad list could not be corrected.
        Commands::Config {
            show,
            set_data_file,
            set_policy_start,
            set_policy_limit,
            set_warn_threshold,
            add_email,
            remove_email,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_data_file.clone(),
            *set_policy_start,
            *set_policy_limit,
            *set_warn_threshold,
            add_email.clone(),
            remove_email.clone(),
            *set_output,
            *reset,
        ),

        _ => {
            let policy = config.policy.clone();
            check_access(&cli, &policy)?;

            let repo = CsvLedgerRepository::new(config.data_file()?);
            if cli.verbose {
                eprintln!("Ledger file: {}", repo.csv_path().display());
            }

            match &cli.command {
                Commands::Add {
                    employee,
                    start,
                    end,
                    email,
                    route,
                } => cmd_add(
                    &repo,
                    employee,
                    email.as_deref().unwrap_or(""),
                    *start,
                    *end,
                    route.as_deref().unwrap_or(""),
                ),

                Commands::Summary { as_of } => {
                    cmd_summary(&repo, &policy, *as_of, output_format)
                }

                Commands::List { limit } => cmd_list(&repo, *limit, output_format),

                Commands::Export { output } => cmd_export(&repo, output.clone()),

                Commands::Config { .. } => unreachable!("handled above"),
            }
        }
    }
}

/// Dashboard access gate: the caller's email must be on the allow-list.
///
/// This is a collaborator concern of the CLI, not of the ledger core.
fn check_access(cli: &Cli, policy: &TravelPolicy) -> Result<()> {
    let user = cli.user.as_deref().unwrap_or("");
    if !policy.is_authorized(user) {
        return Err(Error::AccessDenied(user.trim().to_string()));
    }
    if cli.verbose && !user.trim().is_empty() {
        eprintln!("Welcome {}!", user.trim());
    }
    Ok(())
}

fn cmd_add(
    repo: &CsvLedgerRepository,
    employee: &str,
    email: &str,
    start: NaiveDate,
    end: NaiveDate,
    route: &str,
) -> Result<()> {
    let ledger = repo.load()?;
    let updated = ledger.with_appended(employee, email, start, end, route)?;
    repo.save(&updated)?;

    if let Some(record) = updated.records().last() {
        println!(
            "Trip added for {} — {} days ({} to {})",
            record.employee, record.days_traveled, record.travel_start, record.travel_end
        );
    }
    Ok(())
}

fn cmd_summary(
    repo: &CsvLedgerRepository,
    policy: &TravelPolicy,
    as_of: Option<NaiveDate>,
    output_format: OutputFormat,
) -> Result<()> {
    let ledger = repo.load()?;

    // The engine itself never reads the wall clock
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let summary = summarize(&ledger, policy.start_date, policy.limit_days, as_of);
    let usage = usage_report(&summary, policy.limit_days, policy.warn_threshold_days);

    output_summary(output_format, &summary, &usage, policy)
}

fn cmd_list(
    repo: &CsvLedgerRepository,
    limit: usize,
    output_format: OutputFormat,
) -> Result<()> {
    let ledger = repo.load()?;
    output_trip_list(output_format, &ledger, limit)
}

fn cmd_export(repo: &CsvLedgerRepository, output: PathBuf) -> Result<()> {
    let ledger = repo.load()?;
    CsvLedgerRepository::new(output.clone()).save(&ledger)?;
    println!("Exported {} trips to: {}", ledger.len(), output.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_data_file: Option<PathBuf>,
    set_policy_start: Option<NaiveDate>,
    set_policy_limit: Option<i64>,
    set_warn_threshold: Option<i64>,
    add_email: Option<String>,
    remove_email: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_data_file {
        config.data_file = Some(path);
        modified = true;
    }

    if let Some(start_date) = set_policy_start {
        config.policy.start_date = start_date;
        modified = true;
    }

    if let Some(limit_days) = set_policy_limit {
        config.policy.limit_days = limit_days;
        modified = true;
    }

    if let Some(threshold) = set_warn_threshold {
        config.policy.warn_threshold_days = threshold;
        modified = true;
    }

    if let Some(email) = add_email {
        let email = email.trim().to_lowercase();
        if !email.is_empty() && !config.policy.authorized_emails.contains(&email) {
            config.policy.authorized_emails.push(email);
        }
        modified = true;
    }

    if let Some(email) = remove_email {
        let needle = email.trim().to_lowercase();
        config
            .policy
            .authorized_emails
            .retain(|e| e.trim().to_lowercase() != needle);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
