use std::io::Read;

use super::model::{CoreCompetency, Employer, Job, Location, PositionType};
use super::registry::EntityRegistry;
use super::LoadError;

/// Name, employer, location, position type, skill.
const COLUMN_COUNT: usize = 5;

/// Everything produced by one successful load.
#[derive(Debug, Default)]
pub struct JobCatalog {
    pub jobs: Vec<Job>,
    pub employers: EntityRegistry<Employer>,
    pub locations: EntityRegistry<Location>,
    pub position_types: EntityRegistry<PositionType>,
    pub core_competencies: EntityRegistry<CoreCompetency>,
}

impl JobCatalog {
    fn push_row(&mut self, row: &csv::StringRecord) {
        let employer = self.employers.intern(&row[1]);
        let location = self.locations.intern(&row[2]);
        let position_type = self.position_types.intern(&row[3]);
        let core_competency = self.core_competencies.intern(&row[4]);

        self.jobs.push(Job {
            id: self.jobs.len() + 1,
            name: row[0].to_string(),
            employer,
            location,
            position_type,
            core_competency,
        });
    }
}

/// Reads a header row followed by job rows. Columns are taken by position;
/// header names and width are not checked, and extra trailing fields are ignored.
pub(crate) fn parse_catalog<R: Read>(reader: R) -> Result<JobCatalog, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut catalog = JobCatalog::default();
    let mut record = csv::StringRecord::new();

    while csv_reader.read_record(&mut record)? {
        if record.len() < COLUMN_COUNT {
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            return Err(LoadError::ShortRow {
                line,
                found: record.len(),
            });
        }

        catalog.push_row(&record);
    }

    Ok(catalog)
}
