//! Recommendation scoring: ranks active projects against a profile.
//!
//! Each project collects independent contributions, each with a reason:
//! 1. time fit: +3 if the estimate fits the session, −1 if it does not
//! 2. energy match: +2 on a case-insensitive match, −0.5 on a mismatch
//! 3. season match: +1 when the profile's season is one of the project's
//! 4. priority boost: + intrinsic priority
//!
//! Missing project data skips the affected contribution. The score is
//! rounded to 2 decimals and results are stably sorted highest first.

use serde::Serialize;

use crate::models::profile::Profile;
use crate::models::project::Project;

pub const TIME_FIT_BONUS: f64 = 3.0;
pub const TOO_LONG_PENALTY: f64 = -1.0;
pub const ENERGY_MATCH_BONUS: f64 = 2.0;
pub const ENERGY_MISMATCH_PENALTY: f64 = -0.5;
pub const SEASON_MATCH_BONUS: f64 = 1.0;

/// A project with its computed score and the reasons behind it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProject {
    #[serde(flatten)]
    pub project: Project,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// One scoring rule's effect on a project.
#[derive(Debug, Clone, PartialEq)]
struct Contribution {
    delta: f64,
    reason: String,
}

impl Contribution {
    fn new(delta: f64, reason: String) -> Self {
        Self { delta, reason }
    }
}

/// Scores every project against `profile` and returns them highest first.
/// Projects with equal scores keep their input order. The caller is
/// responsible for passing only active projects.
pub fn score_projects(profile: &Profile, projects: &[Project]) -> Vec<ScoredProject> {
    let mut scored: Vec<ScoredProject> = projects
        .iter()
        .map(|project| score_project(profile, project))
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

pub fn score_project(profile: &Profile, project: &Project) -> ScoredProject {
    let contributions = [
        Some(time_fit(profile, project)),
        energy_match(profile, project),
        season_match(profile, project),
        priority_boost(project),
    ];

    let mut score = 0.0_f64;
    let mut reasons = Vec::with_capacity(contributions.len());
    for contribution in contributions.into_iter().flatten() {
        score += contribution.delta;
        reasons.push(contribution.reason);
    }

    ScoredProject {
        project: project.clone(),
        score: round2(score),
        reasons,
    }
}

fn time_fit(profile: &Profile, project: &Project) -> Contribution {
    let hours = profile.time_available;
    if !hours.is_finite() || hours <= 0.0 {
        return Contribution::new(0.0, "No time constraint specified".to_string());
    }

    let available_minutes = hours * 60.0;
    let estimated = project.estimated_time_minutes.unwrap_or(0);
    if f64::from(estimated) <= available_minutes {
        Contribution::new(
            TIME_FIT_BONUS,
            format!("Time fit: {estimated} min ≤ {available_minutes} min available"),
        )
    } else {
        Contribution::new(
            TOO_LONG_PENALTY,
            format!("Too long: {estimated} min > {available_minutes} min available"),
        )
    }
}

fn energy_match(profile: &Profile, project: &Project) -> Option<Contribution> {
    let energy = non_blank(&profile.energy_level)?;
    let effort = project.effort_level.as_deref().and_then(non_blank)?;

    Some(if energy.eq_ignore_ascii_case(effort) {
        Contribution::new(ENERGY_MATCH_BONUS, format!("Energy match: {effort}"))
    } else {
        Contribution::new(
            ENERGY_MISMATCH_PENALTY,
            format!("Energy mismatch: project {effort}, profile {energy}"),
        )
    })
}

/// Silent on mismatch, unlike the time and energy rules.
fn season_match(profile: &Profile, project: &Project) -> Option<Contribution> {
    let season = non_blank(&profile.season)?;
    project
        .season
        .iter()
        .any(|s| s.trim().eq_ignore_ascii_case(season))
        .then(|| Contribution::new(SEASON_MATCH_BONUS, format!("Season match: {season}")))
}

fn priority_boost(project: &Project) -> Option<Contribution> {
    project
        .intrinsic_priority
        .map(|p| Contribution::new(f64::from(p), format!("Priority boost: +{p}")))
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Rounds half away from zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
