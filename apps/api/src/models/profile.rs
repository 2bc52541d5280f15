use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::attributes::{EnergyLevel, Season};
use crate::models::NumericInput;

/// A saved set of session constraints used to personalise recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    /// Hours available for a work session. Zero means unconstrained.
    pub time_available: f64,
    pub energy_level: String,
    pub season: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw profile body as sent by clients. Every field is optional here;
/// `profiles::validation` decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub name: Option<String>,
    pub time_available: Option<NumericInput>,
    pub energy_level: Option<String>,
    pub season: Option<String>,
}

/// A profile body that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub time_available: f64,
    pub energy_level: EnergyLevel,
    pub season: Season,
}
