use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, info};

use super::field::JobField;
use super::model::{CoreCompetency, Employer, Job, Location, PositionType};
use super::normalizer::{contains_folded, intern_key};
use super::parser::{parse_catalog, JobCatalog};
use super::source::{CsvFile, JobSource};
use super::LoadError;
use crate::config::DataConfig;

/// Selector meaning "every column" or, as a value, "every job".
const ALL: &str = "all";

/// Lazily loaded job catalog with search operations.
///
/// The export is read on the first query. A successful load is kept for the
/// lifetime of the value; a failed one is logged, yields empty results, and
/// is attempted again on the next query.
pub struct JobData {
    source: Box<dyn JobSource>,
    catalog: Mutex<Option<Arc<JobCatalog>>>,
}

impl JobData {
    pub fn new<S: JobSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            catalog: Mutex::new(None),
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(CsvFile::new(config.path.clone()))
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    /// Loads the export unless a previous load succeeded. Never fails; on
    /// error the returned catalog is empty and nothing is cached.
    pub fn ensure_loaded(&self) -> Arc<JobCatalog> {
        let mut slot = self.lock();
        if let Some(catalog) = slot.as_ref() {
            return Arc::clone(catalog);
        }

        let source = self.source.describe();
        match self.load() {
            Ok(catalog) => {
                info!(
                    source = %source,
                    jobs = catalog.jobs.len(),
                    employers = catalog.employers.len(),
                    locations = catalog.locations.len(),
                    "job data loaded"
                );
                let catalog = Arc::new(catalog);
                *slot = Some(Arc::clone(&catalog));
                catalog
            }
            Err(err) => {
                error!(source = %source, error = %err, "failed to load job data");
                Arc::new(JobCatalog::default())
            }
        }
    }

    fn load(&self) -> Result<JobCatalog, LoadError> {
        let reader = self.source.open()?;
        parse_catalog(reader)
    }

    // The slot is only ever replaced wholesale, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<JobCatalog>>> {
        self.catalog
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn find_all(&self) -> Vec<Job> {
        self.ensure_loaded().jobs.clone()
    }

    /// Jobs with at least one column containing `term`, ignoring case.
    pub fn find_by_value(&self, term: &str) -> Vec<Job> {
        let catalog = self.ensure_loaded();
        let needle = intern_key(term);

        catalog
            .jobs
            .iter()
            .filter(|job| {
                JobField::ALL
                    .iter()
                    .any(|field| contains_folded(job.field(*field), &needle))
            })
            .cloned()
            .collect()
    }

    /// Column search as issued by the listing pages.
    ///
    /// A `value` of "all" (any case) returns every job regardless of column;
    /// a `column` of exactly "all" searches every column. Other columns go
    /// through [`JobField::from_selector`], unknown names included.
    pub fn find_by_column_and_value(&self, column: &str, value: &str) -> Vec<Job> {
        if value.to_lowercase() == ALL {
            return self.find_all();
        }

        if column == ALL {
            return self.find_by_value(value);
        }

        debug!(column, value, "column search");
        self.find_by_field(JobField::from_selector(column), value)
    }

    pub fn find_by_field(&self, field: JobField, value: &str) -> Vec<Job> {
        let catalog = self.ensure_loaded();
        let needle = intern_key(value);

        catalog
            .jobs
            .iter()
            .filter(|job| contains_folded(job.field(field), &needle))
            .cloned()
            .collect()
    }

    /// Display string of `job`'s column named by `field_name`; unrecognised
    /// names read the skill column.
    pub fn field_value(job: &Job, field_name: &str) -> String {
        job.field(JobField::from_selector(field_name)).to_string()
    }

    pub fn all_employers(&self) -> Vec<Arc<Employer>> {
        self.ensure_loaded().employers.sorted()
    }

    pub fn all_locations(&self) -> Vec<Arc<Location>> {
        self.ensure_loaded().locations.sorted()
    }

    pub fn all_position_types(&self) -> Vec<Arc<PositionType>> {
        self.ensure_loaded().position_types.sorted()
    }

    pub fn all_core_competencies(&self) -> Vec<Arc<CoreCompetency>> {
        self.ensure_loaded().core_competencies.sorted()
    }
}
