//! Axum route handlers for the Skills API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::skills::gap::{JobComparison, SkillGapResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Absent or null lists are treated as empty.
#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default)]
    pub user_skills: Option<Vec<String>>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_skills: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct CompareJobsRequest {
    #[serde(default)]
    pub user_skills: Option<Vec<String>>,
    pub jobs: Vec<JobPosting>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/gap
///
/// Classifies each required/preferred skill as have / partial / missing.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResult>, AppError> {
    let user_skills = request.user_skills.unwrap_or_default();
    let required = request.required_skills.unwrap_or_default();
    let preferred = request.preferred_skills.unwrap_or_default();

    let result = state
        .skill_matcher
        .analyze_skill_gap(&user_skills, &required, &preferred);

    Ok(Json(result))
}

/// POST /api/v1/skills/compare
///
/// Runs the gap analysis against several jobs and ranks them by coverage.
pub async fn handle_compare_jobs(
    State(state): State<AppState>,
    Json(request): Json<CompareJobsRequest>,
) -> Result<Json<JobComparison>, AppError> {
    if request.jobs.is_empty() {
        return Err(AppError::Validation("jobs cannot be empty".to_string()));
    }
    let limit = state.config.max_compare_jobs;
    if request.jobs.len() > limit {
        return Err(AppError::Validation(format!(
            "at most {limit} jobs can be compared at once, got {}",
            request.jobs.len()
        )));
    }

    let user_skills = request.user_skills.unwrap_or_default();
    let comparison = state.skill_matcher.compare_jobs(&user_skills, &request.jobs);

    info!(
        "Compared {} jobs against {} user skills",
        comparison.entries.len(),
        user_skills.len()
    );

    Ok(Json(comparison))
}
