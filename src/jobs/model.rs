use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::field::JobField;

/// A value object identified by its display name.
///
/// Registries intern implementors by a case-folded form of [`NamedEntity::name`].
pub trait NamedEntity: fmt::Display {
    fn from_name(name: String) -> Self;
    fn name(&self) -> &str;
}

macro_rules! named_entity {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $ty {
            name: String,
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self { name: name.into() }
            }
        }

        impl NamedEntity for $ty {
            fn from_name(name: String) -> Self {
                Self { name }
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.name)
            }
        }
    };
}

named_entity!(
    /// Company offering the position.
    Employer
);
named_entity!(
    /// City or region the job is based in.
    Location
);
named_entity!(
    /// Role family, e.g. "Web - Back End".
    PositionType
);
named_entity!(
    /// Primary skill the listing asks for.
    CoreCompetency
);

/// One listing from the export. Entities are shared with every other job
/// that named them, so cloning a `Job` never copies employer data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: usize,
    pub name: String,
    pub employer: Arc<Employer>,
    pub location: Arc<Location>,
    pub position_type: Arc<PositionType>,
    pub core_competency: Arc<CoreCompetency>,
}

impl Job {
    pub fn field(&self, field: JobField) -> &str {
        match field {
            JobField::Name => &self.name,
            JobField::Employer => self.employer.name(),
            JobField::Location => self.location.name(),
            JobField::PositionType => self.position_type.name(),
            JobField::CoreCompetency => self.core_competency.name(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.name, self.employer, self.location, self.position_type, self.core_competency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job {
            id: 1,
            name: "Junior Data Analyst".to_string(),
            employer: Arc::new(Employer::new("Lockerdome")),
            location: Arc::new(Location::new("Saint Louis")),
            position_type: Arc::new(PositionType::new("Data Scientist / Business Intelligence")),
            core_competency: Arc::new(CoreCompetency::new("Statistical Analysis")),
        }
    }

    #[test]
    fn entity_equality_is_case_sensitive() {
        assert_eq!(Employer::new("LaunchCode"), Employer::new("LaunchCode"));
        assert_ne!(Employer::new("LaunchCode"), Employer::new("launchcode"));
    }

    #[test]
    fn entity_displays_its_name() {
        let location = Location::new("Kansas City");
        assert_eq!(location.to_string(), "Kansas City");
        assert_eq!(location.name(), "Kansas City");
    }

    #[test]
    fn job_field_reads_each_column() {
        let job = sample_job();
        assert_eq!(job.field(JobField::Name), "Junior Data Analyst");
        assert_eq!(job.field(JobField::Employer), "Lockerdome");
        assert_eq!(job.field(JobField::Location), "Saint Louis");
        assert_eq!(
            job.field(JobField::PositionType),
            "Data Scientist / Business Intelligence"
        );
        assert_eq!(job.field(JobField::CoreCompetency), "Statistical Analysis");
    }

    #[test]
    fn job_serializes_nested_entities() {
        let value = serde_json::to_value(sample_job()).expect("job serializes");
        assert_eq!(value["employer"]["name"], "Lockerdome");
        assert_eq!(value["positionType"]["name"], "Data Scientist / Business Intelligence");
        assert_eq!(value["coreCompetency"]["name"], "Statistical Analysis");
        assert_eq!(value["id"], 1);
        for field in JobField::ALL {
            assert!(
                value.get(field.selector()).is_some(),
                "json key matches selector {}",
                field.selector()
            );
        }
    }

    #[test]
    fn job_displays_every_column() {
        assert_eq!(
            sample_job().to_string(),
            "Junior Data Analyst | Lockerdome | Saint Louis | Data Scientist / Business Intelligence | Statistical Analysis"
        );
    }
}
