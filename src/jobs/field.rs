use serde::Serialize;

/// Searchable job columns, in the order value searches inspect them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum JobField {
    Name,
    Employer,
    Location,
    PositionType,
    CoreCompetency,
}

impl JobField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Employer,
        Self::Location,
        Self::PositionType,
        Self::CoreCompetency,
    ];

    /// Resolves a column selector the way the listing pages always have:
    /// anything unrecognised reads the skill column.
    ///
    /// The fallback may be an old copy-paste slip rather than intent. Callers
    /// that need to reject unknown columns should use [`JobField::parse`].
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "name" => Self::Name,
            "employer" => Self::Employer,
            "location" => Self::Location,
            "positionType" => Self::PositionType,
            _ => Self::CoreCompetency,
        }
    }

    pub fn parse(selector: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.selector() == selector)
    }

    pub const fn selector(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Employer => "employer",
            Self::Location => "location",
            Self::PositionType => "positionType",
            Self::CoreCompetency => "coreCompetency",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Employer => "Employer",
            Self::Location => "Location",
            Self::PositionType => "Position Type",
            Self::CoreCompetency => "Skill",
        }
    }
}
