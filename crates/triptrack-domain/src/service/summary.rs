//! Policy usage summary over the trip ledger
//!
//! Pure derivation: no storage access, no wall clock. The "current date" is
//! passed in as `as_of`, so the same ledger always produces the same summary.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Ledger;
use crate::model::TripRecord;

/// Trips of one employee, in append order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeTrips {
    pub employee: String,
    pub trips: Vec<TripRecord>,
}

impl EmployeeTrips {
    pub fn days_used(&self) -> i64 {
        self.trips.iter().map(|t| t.days_traveled).sum()
    }
}

/// Aggregate usage derived from the full ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicySummary {
    pub total_days: i64,

    /// Allowance minus total. Negative means the policy is over-spent;
    /// that is a signal for the caller, not an error.
    pub days_remaining: i64,

    /// Calendar days between the policy start and `as_of`. Negative when
    /// `as_of` precedes the policy start.
    pub days_since_policy_start: i64,

    /// Groups keyed by the exact employee string, first-seen order.
    /// "Jane" and "jane" are distinct groups.
    pub trips_by_employee: Vec<EmployeeTrips>,
}

impl PolicySummary {
    pub fn trips_for(&self, employee: &str) -> Option<&EmployeeTrips> {
        self.trips_by_employee
            .iter()
            .find(|g| g.employee == employee)
    }
}

/// Derive a [`PolicySummary`] from the current ledger state
pub fn summarize(
    ledger: &Ledger,
    policy_start: NaiveDate,
    policy_limit_days: i64,
    as_of: NaiveDate,
) -> PolicySummary {
    let total_days: i64 = ledger.records().iter().map(|r| r.days_traveled).sum();

    let mut trips_by_employee: Vec<EmployeeTrips> = Vec::new();
    for record in ledger.records() {
        match trips_by_employee
            .iter_mut()
            .find(|g| g.employee == record.employee)
        {
            Some(group) => group.trips.push(record.clone()),
            None => trips_by_employee.push(EmployeeTrips {
                employee: record.employee.clone(),
                trips: vec![record.clone()],
            }),
        }
    }

    PolicySummary {
        total_days,
        days_remaining: policy_limit_days - total_days,
        days_since_policy_start: (as_of - policy_start).num_days(),
        trips_by_employee,
    }
}

/// Per-employee usage against the allowance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeUsage {
    pub employee: String,
    pub days_used: i64,
    pub days_left: i64,

    /// Share of the allowance used, clipped at 100
    pub usage_percent: f64,

    /// True once `days_used` reaches the warn threshold
    pub close_to_limit: bool,
}

/// Break the summary down per employee, in the summary's group order
pub fn usage_report(
    summary: &PolicySummary,
    policy_limit_days: i64,
    warn_threshold_days: i64,
) -> Vec<EmployeeUsage> {
    summary
        .trips_by_employee
        .iter()
        .map(|group| {
            let days_used = group.days_used();
            let usage_percent =
                (days_used as f64 / policy_limit_days as f64 * 100.0).min(100.0);
            EmployeeUsage {
                employee: group.employee.clone(),
                days_used,
                days_left: policy_limit_days - days_used,
                usage_percent,
                close_to_limit: days_used >= warn_threshold_days,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy_start() -> NaiveDate {
        date(2025, 9, 30)
    }

    fn ledger_with_trips(trips: &[(&str, NaiveDate, NaiveDate)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (employee, start, end) in trips {
            ledger = ledger.with_appended(employee, "", *start, *end, "").unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_ledger_summary() {
        let summary = summarize(&Ledger::new(), policy_start(), 250, date(2025, 10, 10));
        assert_eq!(summary.total_days, 0);
        assert_eq!(summary.days_remaining, 250);
        assert!(summary.trips_by_employee.is_empty());
    }

    #[test]
    fn test_totals_and_grouping() {
        // Jane 5 + 3 days, Ravi 10 days
        let ledger = ledger_with_trips(&[
            ("Jane", date(2025, 10, 1), date(2025, 10, 5)),
            ("Ravi", date(2025, 11, 1), date(2025, 11, 10)),
            ("Jane", date(2025, 12, 1), date(2025, 12, 3)),
        ]);

        let summary = summarize(&ledger, policy_start(), 250, date(2025, 12, 31));
        assert_eq!(summary.total_days, 18);
        assert_eq!(summary.days_remaining, 232);

        let jane = summary.trips_for("Jane").unwrap();
        assert_eq!(jane.trips.len(), 2);
        assert_eq!(jane.trips[0].days_traveled, 5);
        assert_eq!(jane.trips[1].days_traveled, 3);
        assert_eq!(jane.days_used(), 8);

        let ravi = summary.trips_for("Ravi").unwrap();
        assert_eq!(ravi.trips.len(), 1);
        assert_eq!(ravi.days_used(), 10);
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let ledger = ledger_with_trips(&[
            ("Ravi", date(2025, 10, 1), date(2025, 10, 1)),
            ("Jane", date(2025, 10, 2), date(2025, 10, 2)),
            ("Ravi", date(2025, 10, 3), date(2025, 10, 3)),
        ]);

        let summary = summarize(&ledger, policy_start(), 250, date(2025, 10, 10));
        let names: Vec<_> = summary
            .trips_by_employee
            .iter()
            .map(|g| g.employee.as_str())
            .collect();
        assert_eq!(names, ["Ravi", "Jane"]);
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let ledger = ledger_with_trips(&[
            ("Jane", date(2025, 10, 1), date(2025, 10, 1)),
            ("jane", date(2025, 10, 2), date(2025, 10, 2)),
        ]);

        let summary = summarize(&ledger, policy_start(), 250, date(2025, 10, 10));
        assert_eq!(summary.trips_by_employee.len(), 2);
    }

    #[test]
    fn test_days_since_policy_start() {
        let summary = summarize(&Ledger::new(), policy_start(), 250, date(2025, 10, 10));
        assert_eq!(summary.days_since_policy_start, 10);
    }

    #[test]
    fn test_days_since_policy_start_negative_before_start() {
        let summary = summarize(&Ledger::new(), policy_start(), 250, date(2025, 9, 20));
        assert_eq!(summary.days_since_policy_start, -10);
    }

    #[test]
    fn test_days_remaining_goes_negative_on_overage() {
        let ledger = ledger_with_trips(&[("Jane", date(2025, 10, 1), date(2025, 10, 5))]);
        let summary = summarize(&ledger, policy_start(), 3, date(2025, 10, 10));
        assert_eq!(summary.days_remaining, -2);
    }

    #[test]
    fn test_usage_report() {
        let ledger = ledger_with_trips(&[
            ("Jane", date(2025, 1, 1), date(2025, 8, 8)), // 220 days
            ("Ravi", date(2025, 10, 1), date(2025, 10, 5)), // 5 days
        ]);

        let summary = summarize(&ledger, policy_start(), 250, date(2025, 10, 10));
        let report = usage_report(&summary, 250, 200);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].employee, "Jane");
        assert_eq!(report[0].days_used, 220);
        assert_eq!(report[0].days_left, 30);
        assert!(report[0].close_to_limit);
        assert!((report[0].usage_percent - 88.0).abs() < 0.01);

        assert_eq!(report[1].employee, "Ravi");
        assert_eq!(report[1].days_left, 245);
        assert!(!report[1].close_to_limit);
    }

    #[test]
    fn test_usage_percent_clipped_at_100() {
        let ledger = ledger_with_trips(&[("Jane", date(2025, 1, 1), date(2025, 12, 31))]);
        let summary = summarize(&ledger, policy_start(), 250, date(2025, 12, 31));
        let report = usage_report(&summary, 250, 200);
        assert_eq!(report[0].days_used, 365);
        assert_eq!(report[0].usage_percent, 100.0);
        assert_eq!(report[0].days_left, -115);
    }
}
