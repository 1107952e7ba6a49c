//! Output formatting module

use triptrack_domain::model::{Ledger, TravelPolicy};
use triptrack_domain::service::{EmployeeUsage, PolicySummary};
use triptrack_types::{OutputFormat, Result};

pub fn output_summary(
    output_format: OutputFormat,
    summary: &PolicySummary,
    usage: &[EmployeeUsage],
    policy: &TravelPolicy,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summary)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nTravel Summary");
    println!("==============");
    println!("Policy start:            {}", policy.start_date);
    println!(
        "Days since policy start: {}",
        summary.days_since_policy_start
    );
    println!("Total days used:         {}", summary.total_days);
    println!(
        "Days remaining:          {} (of {})",
        summary.days_remaining, policy.limit_days
    );
    if summary.days_remaining < 0 {
        println!(
            "Policy overage:          {} days over the allowance",
            -summary.days_remaining
        );
    }

    if summary.trips_by_employee.is_empty() {
        println!("\nNo trips logged yet.");
        return Ok(());
    }

    println!("\nUsage by Employee");
    println!("-----------------");
    println!(
        "{:<24} {:>6} {:>10} {:>8}",
        "Employee", "Days", "Days Left", "Usage %"
    );
    println!("{}", "-".repeat(52));
    for entry in usage {
        let flag = if entry.close_to_limit { "  !" } else { "" };
        println!(
            "{:<24} {:>6} {:>10} {:>7.1}%{}",
            truncate(&entry.employee, 24),
            entry.days_used,
            entry.days_left,
            entry.usage_percent,
            flag
        );
    }

    println!("\nTravel Periods");
    println!("--------------");
    for group in &summary.trips_by_employee {
        let periods: Vec<String> = group
            .trips
            .iter()
            .map(|t| format!("{} -> {}", t.travel_start, t.travel_end))
            .collect();
        println!("{}: {}", group.employee, periods.join(", "));
    }

    Ok(())
}

pub fn output_trip_list(
    output_format: OutputFormat,
    ledger: &Ledger,
    limit: usize,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(ledger.records())?;
        println!("{}", content);
        return Ok(());
    }

    println!("All Trips");
    println!("=========");
    println!("Total trips: {}", ledger.len());
    println!();

    if ledger.is_empty() {
        println!("No trips logged yet.");
        return Ok(());
    }

    println!(
        "{:<24} {:>6} {:>12} {:>12} {:<16} {:<24}",
        "Employee", "Days", "Start", "End", "Route", "Email"
    );
    println!("{}", "-".repeat(98));

    for record in ledger.records().iter().take(limit) {
        println!(
            "{:<24} {:>6} {:>12} {:>12} {:<16} {:<24}",
            truncate(&record.employee, 24),
            record.days_traveled,
            record.travel_start.to_string(),
            record.travel_end.to_string(),
            truncate(&record.route, 16),
            truncate(&record.email, 24)
        );
    }

    if ledger.len() > limit {
        println!();
        println!("... and {} more trips", ledger.len() - limit);
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
