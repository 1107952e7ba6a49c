//! CSV-backed trip ledger repository
//!
//! Stores one row per trip in a flat CSV file. Dates are written as ISO 8601
//! (`%Y-%m-%d`); reads also accept the day/month/year convention used by
//! older exports. The stored `Days Traveled` value is never trusted: it is
//! re-derived from the date range on every load.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use triptrack_domain::model::{Ledger, TripRecord};
use triptrack_domain::repository::LedgerRepository;
use triptrack_types::StorageError;

/// Canonical column set, in the order preserved on every write
pub const CSV_HEADERS: [&str; 6] = [
    "Employee",
    "Days Traveled",
    "Travel Start",
    "Travel End",
    "Route",
    "Email",
];

const WRITE_DATE_FORMAT: &str = "%Y-%m-%d";
const READ_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// CSV file implementation of [`LedgerRepository`]
pub struct CsvLedgerRepository {
    csv_path: PathBuf,
}

impl CsvLedgerRepository {
    pub fn new(csv_path: PathBuf) -> Self {
        Self { csv_path }
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Rewrite the whole file from the given ledger
    fn write_ledger(&self, ledger: &Ledger) -> Result<(), StorageError> {
        if let Some(parent) = self.csv_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.csv_path)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));

        writer.write_record(CSV_HEADERS)?;
        for record in ledger.records() {
            let days = record.days_traveled.to_string();
            let start = record.travel_start.format(WRITE_DATE_FORMAT).to_string();
            let end = record.travel_end.format(WRITE_DATE_FORMAT).to_string();
            writer.write_record([
                record.employee.as_str(),
                days.as_str(),
                start.as_str(),
                end.as_str(),
                record.route.as_str(),
                record.email.as_str(),
            ])?;
        }
        writer.flush().map_err(StorageError::Io)?;
        Ok(())
    }
}

impl LedgerRepository for CsvLedgerRepository {
    fn load(&self) -> Result<Ledger, StorageError> {
        if !self.csv_path.exists() {
            // First run: create an empty store with the canonical columns
            let ledger = Ledger::new();
            self.write_ledger(&ledger)?;
            return Ok(ledger);
        }

        let file = File::open(&self.csv_path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        // Columns are matched by name; absent columns default to empty cells
        let headers = reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);
        let employee_idx = column("Employee");
        let start_idx = column("Travel Start");
        let end_idx = column("Travel End");
        let route_idx = column("Route");
        let email_idx = column("Email");

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row = result?;
            let row_num = row_idx + 2; // header is row 1

            let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");

            let travel_start = parse_date(cell(start_idx), row_num)?;
            let travel_end = parse_date(cell(end_idx), row_num)?;

            // Re-validate and re-derive the day count; the stored
            // "Days Traveled" cell is ignored, so unparsable numerics
            // never fail a load.
            let record = TripRecord::new(
                cell(employee_idx),
                cell(email_idx),
                travel_start,
                travel_end,
                cell(route_idx),
            )
            .map_err(|e| StorageError::MalformedRecord {
                row: row_num,
                reason: e.to_string(),
            })?;

            records.push(record);
        }

        Ok(Ledger::from_records(records))
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StorageError> {
        self.write_ledger(ledger)
    }
}

fn parse_date(s: &str, row: usize) -> Result<NaiveDate, StorageError> {
    for fmt in READ_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(StorageError::InvalidDate {
        row,
        value: s.to_string(),
    })
}
