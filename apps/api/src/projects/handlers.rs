use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppJson, OrFail};
use crate::models::attributes::ProjectStatus;
use crate::models::parse_id;
use crate::models::project::{Project, ProjectInput};
use crate::projects::lifecycle::{compute_stats, sort_by_priority, ProjectStats};
use crate::projects::validation::validate_project;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

fn project_id(raw: &str) -> Result<Uuid, AppError> {
    parse_id(raw).ok_or_else(|| AppError::Validation("Invalid project ID".to_string()))
}

fn project_not_found() -> AppError {
    AppError::NotFound("Project not found".to_string())
}

/// POST /api/projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectInput>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let draft = validate_project(&input).map_err(AppError::invalid)?;

    let project = state
        .store
        .create_project(&draft)
        .await
        .or_fail("Failed to create project")?;

    info!("Created project {} ({})", project.id, project.name);
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects?status=...
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let status = match params.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            ProjectStatus::parse(raw)
                .map_err(|_| AppError::Validation("Invalid status".to_string()))?,
        ),
    };

    let projects = state
        .store
        .list_projects(status)
        .await
        .or_fail("Failed to load projects")?;
    Ok(Json(projects))
}

/// GET /api/projects/priority
///
/// Active projects ordered by intrinsic priority, then newest first.
pub async fn handle_projects_by_priority(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    let mut projects = state
        .store
        .active_projects()
        .await
        .or_fail("Failed to load projects")?;
    sort_by_priority(&mut projects);
    Ok(Json(projects))
}

/// GET /api/projects/stats
pub async fn handle_project_stats(
    State(state): State<AppState>,
) -> Result<Json<ProjectStats>, AppError> {
    let projects = state
        .store
        .list_projects(None)
        .await
        .or_fail("Failed to load project stats")?;
    Ok(Json(compute_stats(&projects)))
}

/// GET /api/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let id = project_id(&id)?;
    let project = state
        .store
        .get_project(id)
        .await
        .or_fail("Failed to load project")?
        .ok_or_else(project_not_found)?;
    Ok(Json(project))
}

/// PUT /api/projects/:id
///
/// Full replacement of the client-writable fields. Lifecycle timestamps
/// are left untouched.
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<ProjectInput>,
) -> Result<Json<Project>, AppError> {
    let id = project_id(&id)?;
    let draft = validate_project(&input).map_err(AppError::invalid)?;

    let project = state
        .store
        .update_project(id, &draft)
        .await
        .or_fail("Failed to update project")?
        .ok_or_else(project_not_found)?;
    Ok(Json(project))
}

/// DELETE /api/projects/:id
pub async fn handle_delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = project_id(&id)?;
    let deleted = state
        .store
        .delete_project(id)
        .await
        .or_fail("Failed to delete project")?;
    if !deleted {
        return Err(project_not_found());
    }

    info!("Deleted project {id}");
    Ok(Json(json!({ "message": "Project deleted successfully" })))
}

/// PATCH /api/projects/:id/complete
pub async fn handle_complete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    transition(&state, &id, ProjectStatus::Completed, "Failed to complete project").await
}

/// PATCH /api/projects/:id/abandon
pub async fn handle_abandon_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    transition(&state, &id, ProjectStatus::Abandoned, "Failed to abandon project").await
}

async fn transition(
    state: &AppState,
    raw_id: &str,
    status: ProjectStatus,
    failure: &'static str,
) -> Result<Json<Project>, AppError> {
    let id = project_id(raw_id)?;
    let project = state
        .store
        .set_project_status(id, status, Utc::now())
        .await
        .or_fail(failure)?
        .ok_or_else(project_not_found)?;

    info!("Project {id} is now {}", status.as_str());
    Ok(Json(project))
}
