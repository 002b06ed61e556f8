//! Job listing catalog backed by a CSV export.
//!
//! Rows are loaded lazily on the first query, referenced employers, locations,
//! position types and skills are interned per type, and searches run as plain
//! case-insensitive scans over the loaded jobs.

pub mod config;
pub mod error;
pub mod jobs;
pub mod telemetry;

pub use jobs::{
    CoreCompetency, CsvFile, EntityRegistry, Employer, InMemoryCsv, Job, JobCatalog, JobData,
    JobField, JobSource, LoadError, Location, NamedEntity, PositionType,
};
