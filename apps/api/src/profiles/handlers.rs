use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::{AppError, AppJson, OrFail};
use crate::models::parse_id;
use crate::models::profile::{Profile, ProfileInput};
use crate::profiles::validation::validate_profile;
use crate::state::AppState;

fn profile_id(raw: &str) -> Result<uuid::Uuid, AppError> {
    parse_id(raw).ok_or_else(|| AppError::Validation("Invalid profile id".to_string()))
}

/// GET /api/profiles
pub async fn handle_list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Profile>>, AppError> {
    let profiles = state
        .store
        .list_profiles()
        .await
        .or_fail("Failed to load profiles")?;
    Ok(Json(profiles))
}

/// POST /api/profiles
pub async fn handle_create_profile(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProfileInput>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    let draft = validate_profile(&input).map_err(AppError::invalid)?;

    let profile = state
        .store
        .create_profile(&draft)
        .await
        .or_fail("Failed to create profile")?;

    info!("Created profile {} ({})", profile.id, profile.name);
    Ok((StatusCode::CREATED, Json(profile)))
}

/// PATCH /api/profiles/:id
///
/// Replaces all profile fields; the body is validated like a create.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<ProfileInput>,
) -> Result<Json<Profile>, AppError> {
    let id = profile_id(&id)?;
    let draft = validate_profile(&input).map_err(AppError::invalid)?;

    let profile = state
        .store
        .update_profile(id, &draft)
        .await
        .or_fail("Failed to update profile")?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(Json(profile))
}

/// DELETE /api/profiles/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = profile_id(&id)?;

    let deleted = state
        .store
        .delete_profile(id)
        .await
        .or_fail("Failed to delete profile")?;
    if !deleted {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }

    info!("Deleted profile {id}");
    Ok(Json(json!({ "message": "Profile deleted" })))
}
