//! Data access for profiles and projects.
//!
//! Handlers only see `Arc<dyn Store>`; `PgStore` backs production and
//! `MemoryStore` backs local runs without a database and the router tests.

pub mod memory;
pub mod postgres;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::attributes::ProjectStatus;
use crate::models::profile::{Profile, ProfileDraft};
use crate::models::project::{Project, ProjectDraft};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// All profiles, sorted by name.
    async fn list_profiles(&self) -> Result<Vec<Profile>>;

    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>>;

    async fn create_profile(&self, draft: &ProfileDraft) -> Result<Profile>;

    /// Replaces every client-writable field. `None` when the id is unknown.
    async fn update_profile(&self, id: Uuid, draft: &ProfileDraft) -> Result<Option<Profile>>;

    /// Returns `false` when nothing was deleted.
    async fn delete_profile(&self, id: Uuid) -> Result<bool>;

    /// Projects newest first, optionally restricted to one status.
    async fn list_projects(&self, status: Option<ProjectStatus>) -> Result<Vec<Project>>;

    /// Projects eligible for recommendation, in creation order.
    async fn active_projects(&self) -> Result<Vec<Project>>;

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>>;

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project>;

    /// Replaces every client-writable field; lifecycle timestamps are kept.
    async fn update_project(&self, id: Uuid, draft: &ProjectDraft) -> Result<Option<Project>>;

    async fn delete_project(&self, id: Uuid) -> Result<bool>;

    /// Moves a project to `status`, stamping `completed_at` or
    /// `abandoned_at` with `at` when the status calls for it.
    async fn set_project_status(
        &self,
        id: Uuid,
        status: ProjectStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Project>>;
}

/// Lifecycle timestamps written by a status transition.
pub(crate) fn transition_stamps(
    status: ProjectStatus,
    at: DateTime<Utc>,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    match status {
        ProjectStatus::Completed => (Some(at), None),
        ProjectStatus::Abandoned => (None, Some(at)),
        ProjectStatus::Active | ProjectStatus::Archived => (None, None),
    }
}
