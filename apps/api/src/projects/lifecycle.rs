use std::cmp::Reverse;

use serde::Serialize;

use crate::models::attributes::ProjectStatus;
use crate::models::project::Project;

const RECENT_COMPLETIONS: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub abandoned_projects: usize,
    /// Percentage of all projects that were completed, 1 decimal place.
    pub completion_rate: f64,
    pub recent_completions: Vec<Project>,
}

pub fn compute_stats(projects: &[Project]) -> ProjectStats {
    let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();

    let total_projects = projects.len();
    let completed_projects = count(ProjectStatus::Completed);

    let completion_rate = if total_projects > 0 {
        let pct = completed_projects as f64 / total_projects as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    } else {
        0.0
    };

    let mut recent_completions: Vec<Project> = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .cloned()
        .collect();
    recent_completions.sort_by_key(|p| Reverse(p.completed_at));
    recent_completions.truncate(RECENT_COMPLETIONS);

    ProjectStats {
        total_projects,
        active_projects: count(ProjectStatus::Active),
        completed_projects,
        abandoned_projects: count(ProjectStatus::Abandoned),
        completion_rate,
        recent_completions,
    }
}

/// Orders projects by intrinsic priority (highest first, missing last),
/// then newest first.
pub fn sort_by_priority(projects: &mut [Project]) {
    projects.sort_by_key(|p| (Reverse(p.intrinsic_priority), Reverse(p.created_at)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn make_project(
        name: &str,
        status: ProjectStatus,
        priority: Option<i32>,
        age_days: i64,
    ) -> Project {
        let created =
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::days(age_days);
        Project {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            estimated_time_minutes: Some(60),
            effort_level: Some("low".to_string()),
            intrinsic_priority: priority,
            season: vec![],
            status,
            tags: vec![],
            created_at: created,
            updated_at: created,
            completed_at: (status == ProjectStatus::Completed).then_some(created),
            abandoned_at: None,
        }
    }

    #[test]
    fn test_stats_counts_and_rate() {
        let projects = vec![
            make_project("a", ProjectStatus::Active, Some(3), 1),
            make_project("b", ProjectStatus::Completed, Some(3), 2),
            make_project("c", ProjectStatus::Abandoned, Some(3), 3),
        ];
        let stats = compute_stats(&projects);
        assert_eq!(stats.total_projects, 3);
        assert_eq!(stats.active_projects, 1);
        assert_eq!(stats.completed_projects, 1);
        assert_eq!(stats.abandoned_projects, 1);
        assert_eq!(stats.completion_rate, 33.3);
        assert_eq!(stats.recent_completions.len(), 1);
    }

    #[test]
    fn test_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_projects, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert!(stats.recent_completions.is_empty());
    }

    #[test]
    fn test_recent_completions_newest_five() {
        let projects: Vec<Project> = (0..7)
            .map(|i| make_project(&format!("done{i}"), ProjectStatus::Completed, Some(1), i))
            .collect();
        let stats = compute_stats(&projects);
        assert_eq!(stats.completion_rate, 100.0);
        let names: Vec<_> = stats.recent_completions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["done0", "done1", "done2", "done3", "done4"]);
    }

    #[test]
    fn test_sort_by_priority_then_newest() {
        let mut projects = vec![
            make_project("old-high", ProjectStatus::Active, Some(9), 10),
            make_project("none", ProjectStatus::Active, None, 0),
            make_project("low", ProjectStatus::Active, Some(2), 0),
            make_project("new-high", ProjectStatus::Active, Some(9), 1),
        ];
        sort_by_priority(&mut projects);
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["new-high", "old-high", "low", "none"]);
    }
}
