pub mod health;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::errors::AppError;
use crate::profiles::handlers as profiles;
use crate::projects::handlers as projects;
use crate::recommend::handlers as recommend;
use crate::state::AppState;

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        // Recommendations
        .route("/recommend", get(recommend::handle_recommend))
        .route("/api/recommend", get(recommend::handle_recommend))
        // Profiles
        .route(
            "/api/profiles",
            get(profiles::handle_list_profiles).post(profiles::handle_create_profile),
        )
        .route(
            "/api/profiles/:id",
            patch(profiles::handle_update_profile).delete(profiles::handle_delete_profile),
        )
        // Projects
        .route(
            "/api/projects",
            get(projects::handle_list_projects).post(projects::handle_create_project),
        )
        .route(
            "/api/projects/priority",
            get(projects::handle_projects_by_priority),
        )
        .route("/api/projects/stats", get(projects::handle_project_stats))
        .route(
            "/api/projects/:id",
            get(projects::handle_get_project)
                .put(projects::handle_update_project)
                .delete(projects::handle_delete_project),
        )
        .route(
            "/api/projects/:id/complete",
            patch(projects::handle_complete_project),
        )
        .route(
            "/api/projects/:id/abandon",
            patch(projects::handle_abandon_project),
        )
        .fallback(route_not_found)
        .with_state(state)
}
