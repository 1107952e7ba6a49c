//! Persistence implementations
//!
//! This module provides the CSV-backed implementation of the ledger
//! repository trait.

mod csv_ledger_repo;

pub use csv_ledger_repo::{CsvLedgerRepository, CSV_HEADERS};
