use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use triptrack_types::ValidationError;

/// Number of travel days between two dates, counting both endpoints.
///
/// A same-day trip counts as 1 day.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// A single logged business trip.
///
/// `days_traveled` is always derived from the date range; it is never taken
/// from user input, so it cannot drift from the dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub employee: String,
    pub email: String,
    pub travel_start: NaiveDate,
    pub travel_end: NaiveDate,
    pub route: String,
    pub days_traveled: i64,
}

impl TripRecord {
    /// Validate the input fields and build a record with the derived day count
    pub fn new(
        employee: &str,
        email: &str,
        travel_start: NaiveDate,
        travel_end: NaiveDate,
        route: &str,
    ) -> Result<Self, ValidationError> {
        let employee = employee.trim();
        if employee.is_empty() {
            return Err(ValidationError::EmptyEmployee);
        }
        if travel_start > travel_end {
            return Err(ValidationError::InvertedDateRange {
                start: travel_start,
                end: travel_end,
            });
        }

        Ok(Self {
            employee: employee.to_string(),
            email: email.trim().to_string(),
            travel_start,
            travel_end,
            route: route.trim().to_string(),
            days_traveled: inclusive_days(travel_start, travel_end),
        })
    }
}

/// The ordered collection of all logged trips.
///
/// Insertion order is append order and is preserved across reload. Records
/// are never mutated in place; corrections are made by appending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    records: Vec<TripRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<TripRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate a new trip and return a new ledger with it appended.
    ///
    /// The original ledger is left untouched, so a caller that fails to
    /// persist the result still holds the last-saved state.
    pub fn with_appended(
        &self,
        employee: &str,
        email: &str,
        travel_start: NaiveDate,
        travel_end: NaiveDate,
        route: &str,
    ) -> Result<Ledger, ValidationError> {
        let record = TripRecord::new(employee, email, travel_start, travel_end, route)?;
        let mut records = self.records.clone();
        records.push(record);
        Ok(Ledger { records })
    }
}
