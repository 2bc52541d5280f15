use crate::models::attributes::{EnergyLevel, ProjectStatus, Season};
use crate::models::project::{ProjectDraft, ProjectInput};

const MIN_PRIORITY: i32 = 1;
const MAX_PRIORITY: i32 = 10;

/// Sanitises and validates a project body, collecting every failure.
///
/// Numeric fields accept numbers or numeric strings and are truncated to
/// integers. Tags are trimmed and empty tags dropped. Status defaults to
/// `active`.
pub fn validate_project(input: &ProjectInput) -> Result<ProjectDraft, Vec<String>> {
    let mut errors = Vec::new();

    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.push("Name is required".to_string());
    }

    let estimated_time_minutes = input
        .estimated_time_minutes
        .as_ref()
        .and_then(|raw| raw.as_i32())
        .filter(|minutes| *minutes >= 1);
    if estimated_time_minutes.is_none() {
        errors.push("Estimated time must be at least 1 minute".to_string());
    }

    let effort_level = input.effort_level.as_deref().and_then(EnergyLevel::parse);
    if effort_level.is_none() {
        errors.push("Effort level must be low, medium, or high".to_string());
    }

    let intrinsic_priority = input
        .intrinsic_priority
        .as_ref()
        .and_then(|raw| raw.as_i32())
        .filter(|p| (MIN_PRIORITY..=MAX_PRIORITY).contains(p));
    if intrinsic_priority.is_none() {
        errors.push("Priority must be between 1 and 10".to_string());
    }

    let status = match input.status.as_deref().map(str::trim) {
        None | Some("") => Some(ProjectStatus::Active),
        Some(raw) => ProjectStatus::parse(raw).ok(),
    };
    if status.is_none() {
        errors.push("Invalid status".to_string());
    }

    let raw_seasons = input.season.as_deref().unwrap_or_default();
    let season: Vec<Season> = raw_seasons.iter().filter_map(|s| Season::parse(s)).collect();
    if season.len() != raw_seasons.len() {
        errors.push("Invalid season values".to_string());
    }

    let tags = input
        .tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let description = input
        .description
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    match (estimated_time_minutes, effort_level, intrinsic_priority, status) {
        (Some(estimated_time_minutes), Some(effort_level), Some(intrinsic_priority), Some(status))
            if errors.is_empty() =>
        {
            Ok(ProjectDraft {
                name: name.to_string(),
                description,
                estimated_time_minutes,
                effort_level,
                intrinsic_priority,
                status,
                tags,
                season: dedup_seasons(season),
            })
        }
        _ => Err(errors),
    }
}

fn dedup_seasons(seasons: Vec<Season>) -> Vec<Season> {
    let mut unique = Vec::with_capacity(seasons.len());
    for season in seasons {
        if !unique.contains(&season) {
            unique.push(season);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NumericInput;

    fn valid_input() -> ProjectInput {
        ProjectInput {
            name: Some(" Repaint fence ".to_string()),
            description: Some("  back yard ".to_string()),
            estimated_time_minutes: Some(NumericInput::Number(90.0)),
            effort_level: Some("Medium".to_string()),
            intrinsic_priority: Some(NumericInput::Text("7".to_string())),
            status: None,
            tags: Some(vec![" outdoor ".to_string(), "  ".to_string()]),
            season: Some(vec!["Summer".to_string(), "fall".to_string()]),
        }
    }

    #[test]
    fn test_valid_project_is_sanitised() {
        let draft = validate_project(&valid_input()).unwrap();
        assert_eq!(draft.name, "Repaint fence");
        assert_eq!(draft.description, "back yard");
        assert_eq!(draft.estimated_time_minutes, 90);
        assert_eq!(draft.effort_level, EnergyLevel::Medium);
        assert_eq!(draft.intrinsic_priority, 7);
        assert_eq!(draft.status, ProjectStatus::Active);
        assert_eq!(draft.tags, vec!["outdoor"]);
        assert_eq!(draft.season_tags(), vec!["summer", "fall"]);
    }

    #[test]
    fn test_priority_bounds() {
        let mut input = valid_input();
        input.intrinsic_priority = Some(NumericInput::Number(11.0));
        assert_eq!(
            validate_project(&input).unwrap_err(),
            vec!["Priority must be between 1 and 10"]
        );

        input.intrinsic_priority = Some(NumericInput::Number(0.0));
        assert!(validate_project(&input).is_err());

        input.intrinsic_priority = Some(NumericInput::Number(10.0));
        assert!(validate_project(&input).is_ok());
    }

    #[test]
    fn test_zero_minutes_rejected() {
        let mut input = valid_input();
        input.estimated_time_minutes = Some(NumericInput::Number(0.0));
        assert_eq!(
            validate_project(&input).unwrap_err(),
            vec!["Estimated time must be at least 1 minute"]
        );
    }

    #[test]
    fn test_unknown_status_and_season_rejected() {
        let mut input = valid_input();
        input.status = Some("paused".to_string());
        input.season = Some(vec!["monsoon".to_string()]);
        let errors = validate_project(&input).unwrap_err();
        assert_eq!(errors, vec!["Invalid status", "Invalid season values"]);
    }

    #[test]
    fn test_empty_body_collects_all_errors() {
        let errors = validate_project(&ProjectInput::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], "Name is required");
    }

    #[test]
    fn test_duplicate_seasons_collapsed() {
        let mut input = valid_input();
        input.season = Some(vec!["fall".to_string(), "Fall".to_string()]);
        let draft = validate_project(&input).unwrap();
        assert_eq!(draft.season, vec![Season::Fall]);
    }
}
