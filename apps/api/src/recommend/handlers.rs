use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::{AppError, OrFail};
use crate::models::parse_id;
use crate::recommend::scoring::{score_projects, ScoredProject};
use crate::state::AppState;

const RECOMMENDATION_FAILED: &str = "Recommendation failed";

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(rename = "profileId")]
    pub profile_id: Option<String>,
}

/// GET /api/recommend?profileId=...
///
/// Scores every active project against the profile and returns them
/// highest first. An empty project list yields `[]`, never an error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> Result<Json<Vec<ScoredProject>>, AppError> {
    let profile_id = params
        .profile_id
        .as_deref()
        .and_then(parse_id)
        .ok_or_else(|| AppError::Validation("Invalid profileId".to_string()))?;

    let profile = state
        .store
        .get_profile(profile_id)
        .await
        .or_fail(RECOMMENDATION_FAILED)?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    let projects = state
        .store
        .active_projects()
        .await
        .or_fail(RECOMMENDATION_FAILED)?;

    let ranked = score_projects(&profile, &projects);
    info!(
        "Ranked {} active projects for profile {profile_id}",
        ranked.len()
    );

    Ok(Json(ranked))
}
