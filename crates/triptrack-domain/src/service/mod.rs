//! Domain services

pub mod summary;

pub use summary::{summarize, usage_report, EmployeeTrips, EmployeeUsage, PolicySummary};
