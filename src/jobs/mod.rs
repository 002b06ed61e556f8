mod field;
mod model;
mod normalizer;
mod parser;
mod registry;
mod repository;
mod source;

pub use field::JobField;
pub use model::{CoreCompetency, Employer, Job, Location, NamedEntity, PositionType};
pub use parser::JobCatalog;
pub use registry::EntityRegistry;
pub use repository::JobData;
pub use source::{CsvFile, InMemoryCsv, JobSource};

/// Reasons a job export could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read job export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row on line {line} has {found} columns, expected 5")]
    ShortRow { line: u64, found: usize },
}
