use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::attributes::{EnergyLevel, ProjectStatus, Season};
use crate::models::{lenient_strings, NumericInput};

/// A trackable project. Scoring inputs are nullable because rows written
/// before validation existed may lack them.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub estimated_time_minutes: Option<i32>,
    pub effort_level: Option<String>,
    pub intrinsic_priority: Option<i32>,
    pub season: Vec<String>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub abandoned_at: Option<DateTime<Utc>>,
}

impl Project {
    /// The estimate in hours as a 1-decimal string, halves rounded up.
    pub fn estimated_time_hours(&self) -> Option<String> {
        self.estimated_time_minutes.map(|minutes| {
            let tenths = (f64::from(minutes) / 6.0).round();
            format!("{:.1}", tenths / 10.0)
        })
    }
}

// Written by hand to append the derived `estimatedTimeHours` field.
impl Serialize for Project {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Project", 14)?;
        out.serialize_field("id", &self.id)?;
        out.serialize_field("name", &self.name)?;
        out.serialize_field("description", &self.description)?;
        out.serialize_field("estimatedTimeMinutes", &self.estimated_time_minutes)?;
        out.serialize_field("estimatedTimeHours", &self.estimated_time_hours())?;
        out.serialize_field("effortLevel", &self.effort_level)?;
        out.serialize_field("intrinsicPriority", &self.intrinsic_priority)?;
        out.serialize_field("season", &self.season)?;
        out.serialize_field("status", &self.status)?;
        out.serialize_field("tags", &self.tags)?;
        out.serialize_field("createdAt", &self.created_at)?;
        out.serialize_field("updatedAt", &self.updated_at)?;
        out.serialize_field("completedAt", &self.completed_at)?;
        out.serialize_field("abandonedAt", &self.abandoned_at)?;
        out.end()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub estimated_time_minutes: Option<NumericInput>,
    pub effort_level: Option<String>,
    pub intrinsic_priority: Option<NumericInput>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub season: Option<Vec<String>>,
}

/// A validated project body. Timestamps are never client-writable.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub estimated_time_minutes: i32,
    pub effort_level: EnergyLevel,
    pub intrinsic_priority: i32,
    pub status: ProjectStatus,
    pub tags: Vec<String>,
    pub season: Vec<Season>,
}

impl ProjectDraft {
    pub fn season_tags(&self) -> Vec<String> {
        self.season.iter().map(|s| s.tag().to_string()).collect()
    }
}
