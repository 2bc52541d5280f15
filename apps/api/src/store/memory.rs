use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::attributes::ProjectStatus;
use crate::models::profile::{Profile, ProfileDraft};
use crate::models::project::{Project, ProjectDraft};
use crate::store::{transition_stamps, Store};

/// Process-local store. Rows are kept in insertion order; nothing survives
/// a restart.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<Vec<Profile>>,
    projects: RwLock<Vec<Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply_project_draft(project: &mut Project, draft: &ProjectDraft, now: DateTime<Utc>) {
    project.name = draft.name.clone();
    project.description = draft.description.clone();
    project.estimated_time_minutes = Some(draft.estimated_time_minutes);
    project.effort_level = Some(draft.effort_level.tag().to_string());
    project.intrinsic_priority = Some(draft.intrinsic_priority);
    project.season = draft.season_tags();
    project.status = draft.status;
    project.tags = draft.tags.clone();
    project.updated_at = now;
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let mut profiles = self.profiles.read().await.clone();
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }

    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create_profile(&self, draft: &ProfileDraft) -> Result<Profile> {
        let now = Utc::now();
        let profile = Profile {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            time_available: draft.time_available,
            energy_level: draft.energy_level.label().to_string(),
            season: draft.season.label().to_string(),
            created_at: now,
            updated_at: now,
        };
        self.profiles.write().await.push(profile.clone());
        Ok(profile)
    }

    async fn update_profile(&self, id: Uuid, draft: &ProfileDraft) -> Result<Option<Profile>> {
        let mut profiles = self.profiles.write().await;
        let Some(profile) = profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        profile.name = draft.name.clone();
        profile.time_available = draft.time_available;
        profile.energy_level = draft.energy_level.label().to_string();
        profile.season = draft.season.label().to_string();
        profile.updated_at = Utc::now();
        Ok(Some(profile.clone()))
    }

    async fn delete_profile(&self, id: Uuid) -> Result<bool> {
        let mut profiles = self.profiles.write().await;
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        Ok(profiles.len() < before)
    }

    async fn list_projects(&self, status: Option<ProjectStatus>) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .projects
            .read()
            .await
            .iter()
            .rev()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn active_projects(&self) -> Result<Vec<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .cloned()
            .collect())
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project> {
        let now = Utc::now();
        let mut project = Project {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            estimated_time_minutes: None,
            effort_level: None,
            intrinsic_priority: None,
            season: Vec::new(),
            status: ProjectStatus::Active,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            completed_at: None,
            abandoned_at: None,
        };
        apply_project_draft(&mut project, draft, now);
        self.projects.write().await.push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: Uuid, draft: &ProjectDraft) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        apply_project_draft(project, draft, Utc::now());
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }

    async fn set_project_status(
        &self,
        id: Uuid,
        status: ProjectStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        let (completed_at, abandoned_at) = transition_stamps(status, at);
        project.status = status;
        project.completed_at = completed_at.or(project.completed_at);
        project.abandoned_at = abandoned_at.or(project.abandoned_at);
        project.updated_at = at;
        Ok(Some(project.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attributes::{EnergyLevel, Season};

    fn draft(name: &str, status: ProjectStatus) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            description: String::new(),
            estimated_time_minutes: 60,
            effort_level: EnergyLevel::Low,
            intrinsic_priority: 4,
            status,
            tags: vec![],
            season: vec![Season::Spring],
        }
    }

    #[tokio::test]
    async fn test_active_projects_keep_creation_order() {
        let store = MemoryStore::new();
        store.create_project(&draft("first", ProjectStatus::Active)).await.unwrap();
        store.create_project(&draft("done", ProjectStatus::Completed)).await.unwrap();
        store.create_project(&draft("second", ProjectStatus::Active)).await.unwrap();

        let active = store.active_projects().await.unwrap();
        let names: Vec<_> = active.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_list_projects_newest_first_with_filter() {
        let store = MemoryStore::new();
        store.create_project(&draft("a", ProjectStatus::Active)).await.unwrap();
        store.create_project(&draft("b", ProjectStatus::Archived)).await.unwrap();
        store.create_project(&draft("c", ProjectStatus::Active)).await.unwrap();

        let all = store.list_projects(None).await.unwrap();
        assert_eq!(all.first().map(|p| p.name.as_str()), Some("c"));
        assert_eq!(all.len(), 3);

        let archived = store
            .list_projects(Some(ProjectStatus::Archived))
            .await
            .unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].name, "b");
    }

    #[tokio::test]
    async fn test_status_transition_stamps_timestamp() {
        let store = MemoryStore::new();
        let project = store.create_project(&draft("x", ProjectStatus::Active)).await.unwrap();
        let at = Utc::now();

        let completed = store
            .set_project_status(project.id, ProjectStatus::Completed, at)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(completed.status, ProjectStatus::Completed);
        assert_eq!(completed.completed_at, Some(at));
        assert_eq!(completed.abandoned_at, None);

        let missing = store
            .set_project_status(Uuid::new_v4(), ProjectStatus::Abandoned, at)
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_profile_update_and_delete() {
        let store = MemoryStore::new();
        let created = store
            .create_profile(&ProfileDraft {
                name: "Evening".to_string(),
                time_available: 1.0,
                energy_level: EnergyLevel::Low,
                season: Season::Winter,
            })
            .await
            .unwrap();
        assert_eq!(created.energy_level, "Low");

        let updated = store
            .update_profile(
                created.id,
                &ProfileDraft {
                    name: "Late evening".to_string(),
                    time_available: 0.5,
                    energy_level: EnergyLevel::Medium,
                    season: Season::Winter,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Late evening");
        assert_eq!(updated.energy_level, "Medium");

        assert!(store.delete_profile(created.id).await.unwrap());
        assert!(!store.delete_profile(created.id).await.unwrap());
        assert!(store.get_profile(created.id).await.unwrap().is_none());
    }
}
