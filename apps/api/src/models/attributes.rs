use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much energy a session has (profile) or needs (project effort).
///
/// Profiles store the capitalised label (`"High"`), projects store the
/// lowercase tag (`"high"`). Parsing accepts either casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 3] = [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            EnergyLevel::Low => "Low",
            EnergyLevel::Medium => "Medium",
            EnergyLevel::High => "High",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.tag().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|season| season.tag().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Error)]
#[error("unknown project status '{0}'")]
pub struct UnknownStatus(pub String);

/// Project lifecycle state. Only `Active` projects are eligible for
/// recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[serde(alias = "planned", alias = "Planned")]
    Active,
    Completed,
    Abandoned,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Abandoned => "abandoned",
            ProjectStatus::Archived => "archived",
        }
    }

    /// Case-insensitive parse. The legacy `Planned` state reads as `Active`.
    pub fn parse(raw: &str) -> Result<Self, UnknownStatus> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" | "planned" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "abandoned" => Ok(ProjectStatus::Abandoned),
            "archived" => Ok(ProjectStatus::Archived),
            _ => Err(UnknownStatus(raw.to_string())),
        }
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ProjectStatus::parse(&value)
    }
}
