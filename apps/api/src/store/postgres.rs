use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::attributes::ProjectStatus;
use crate::models::profile::{Profile, ProfileDraft};
use crate::models::project::{Project, ProjectDraft};
use crate::store::{transition_stamps, Store};

// 'planned' rows predate the lifecycle states and count as active. Both
// project queries compare against this normalised status.
macro_rules! normalised_status {
    () => {
        "(CASE lower(status) WHEN 'planned' THEN 'active' ELSE lower(status) END)"
    };
}

const LIST_PROJECTS_SQL: &str = concat!(
    "SELECT * FROM projects WHERE ($1::text IS NULL OR ",
    normalised_status!(),
    " = $1) ORDER BY created_at DESC"
);

const ACTIVE_PROJECTS_SQL: &str = concat!(
    "SELECT * FROM projects WHERE ",
    normalised_status!(),
    " = 'active' ORDER BY created_at ASC, id ASC"
);

/// PostgreSQL-backed store. Queries are checked at runtime so the crate
/// builds without a live database.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        Ok(
            sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>> {
        Ok(
            sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_profile(&self, draft: &ProfileDraft) -> Result<Profile> {
        Ok(sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, name, time_available, energy_level, season)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.name)
        .bind(draft.time_available)
        .bind(draft.energy_level.label())
        .bind(draft.season.label())
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update_profile(&self, id: Uuid, draft: &ProfileDraft) -> Result<Option<Profile>> {
        Ok(sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET name = $2, time_available = $3, energy_level = $4, season = $5, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.time_available)
        .bind(draft.energy_level.label())
        .bind(draft.season.label())
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete_profile(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_projects(&self, status: Option<ProjectStatus>) -> Result<Vec<Project>> {
        Ok(sqlx::query_as::<_, Project>(LIST_PROJECTS_SQL)
            .bind(status.map(ProjectStatus::as_str))
            .fetch_all(&self.pool)
            .await?)
    }

    async fn active_projects(&self) -> Result<Vec<Project>> {
        Ok(sqlx::query_as::<_, Project>(ACTIVE_PROJECTS_SQL)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>> {
        Ok(
            sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project> {
        Ok(sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (id, name, description, estimated_time_minutes, effort_level,
                 intrinsic_priority, season, status, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.estimated_time_minutes)
        .bind(draft.effort_level.tag())
        .bind(draft.intrinsic_priority)
        .bind(draft.season_tags())
        .bind(draft.status.as_str())
        .bind(&draft.tags)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update_project(&self, id: Uuid, draft: &ProjectDraft) -> Result<Option<Project>> {
        Ok(sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET name = $2, description = $3, estimated_time_minutes = $4,
                effort_level = $5, intrinsic_priority = $6, season = $7,
                status = $8, tags = $9, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.estimated_time_minutes)
        .bind(draft.effort_level.tag())
        .bind(draft.intrinsic_priority)
        .bind(draft.season_tags())
        .bind(draft.status.as_str())
        .bind(&draft.tags)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_project_status(
        &self,
        id: Uuid,
        status: ProjectStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Project>> {
        let (completed_at, abandoned_at) = transition_stamps(status, at);
        Ok(sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET status = $2,
                completed_at = COALESCE($3, completed_at),
                abandoned_at = COALESCE($4, abandoned_at),
                updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .bind(completed_at)
        .bind(abandoned_at)
        .bind(at)
        .fetch_optional(&self.pool)
        .await?)
    }
}
