//! Skill gap analysis — classifies each job skill against a candidate's skill list.
//!
//! Algorithm, per job skill (required first, then preferred):
//! 1. some user skill has the same normalized key → `have`
//! 2. else the first user skill (in user order) that partially matches → `partial`
//! 3. else → `missing`
//!
//! Coverage counts `have` + `partial`. No de-duplication of inputs.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::job::JobPosting;
use crate::scoring::coverage_percent;
use crate::skills::normalize::{normalize, SkillMatcher};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    Have,
    Partial,
    Missing,
}

impl SkillStatus {
    pub fn is_covered(self) -> bool {
        matches!(self, SkillStatus::Have | SkillStatus::Partial)
    }
}

/// Which job list a skill came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillPriority {
    Required,
    Preferred,
}

/// One line of a gap report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGapItem {
    pub skill: String,
    pub status: SkillStatus,
    /// The user skill that produced a partial match.
    pub matched_with: Option<String>,
    pub priority: SkillPriority,
}

/// Full gap report for one (candidate, job) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGapResult {
    pub items: Vec<SkillGapItem>,
    pub coverage_required: u8, // 0 – 100
    pub coverage_all: u8,      // 0 – 100
    pub have_count: usize,
    pub partial_count: usize,
    pub missing_count: usize,
}

/// One job in a side-by-side comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobComparisonEntry {
    pub job_id: Option<Uuid>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub gap: SkillGapResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMatch {
    pub job_id: Option<Uuid>,
    pub title: Option<String>,
}

/// Gap reports for several jobs, best coverage first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobComparison {
    pub entries: Vec<JobComparisonEntry>,
    pub best_match: Option<BestMatch>,
}

impl SkillMatcher {
    pub fn analyze_skill_gap(
        &self,
        user_skills: &[String],
        required_skills: &[String],
        preferred_skills: &[String],
    ) -> SkillGapResult {
        let user_keys: Vec<String> = user_skills.iter().map(|s| normalize(s)).collect();

        let tagged = required_skills
            .iter()
            .map(|s| (s, SkillPriority::Required))
            .chain(preferred_skills.iter().map(|s| (s, SkillPriority::Preferred)));

        let items: Vec<SkillGapItem> = tagged
            .map(|(skill, priority)| self.classify(skill, priority, user_skills, &user_keys))
            .collect();

        let count = |status: SkillStatus| items.iter().filter(|i| i.status == status).count();
        let have_count = count(SkillStatus::Have);
        let partial_count = count(SkillStatus::Partial);
        let missing_count = count(SkillStatus::Missing);

        let required_covered = items
            .iter()
            .filter(|i| i.priority == SkillPriority::Required && i.status.is_covered())
            .count();

        let result = SkillGapResult {
            coverage_required: coverage_percent(required_covered, required_skills.len()),
            coverage_all: coverage_percent(have_count + partial_count, items.len()),
            items,
            have_count,
            partial_count,
            missing_count,
        };

        debug!(
            have = result.have_count,
            partial = result.partial_count,
            missing = result.missing_count,
            coverage_required = result.coverage_required,
            "skill gap analyzed"
        );

        result
    }

    /// Runs the gap analysis against each job and ranks the results.
    ///
    /// Order: `coverage_required` desc, then `coverage_all` desc, ties in input order.
    pub fn compare_jobs(&self, user_skills: &[String], jobs: &[JobPosting]) -> JobComparison {
        let mut entries: Vec<JobComparisonEntry> = jobs
            .iter()
            .map(|job| JobComparisonEntry {
                job_id: job.id,
                title: job.title.clone(),
                company: job.company.clone(),
                gap: self.analyze_skill_gap(
                    user_skills,
                    &job.required_skills,
                    &job.preferred_skills,
                ),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.gap
                .coverage_required
                .cmp(&a.gap.coverage_required)
                .then(b.gap.coverage_all.cmp(&a.gap.coverage_all))
        });

        let best_match = entries
            .first()
            .filter(|e| e.gap.coverage_required > 0)
            .map(|e| BestMatch {
                job_id: e.job_id,
                title: e.title.clone(),
            });

        JobComparison {
            entries,
            best_match,
        }
    }

    fn classify(
        &self,
        skill: &str,
        priority: SkillPriority,
        user_skills: &[String],
        user_keys: &[String],
    ) -> SkillGapItem {
        let key = normalize(skill);

        let (status, matched_with) = if user_keys.iter().any(|u| *u == key) {
            (SkillStatus::Have, None)
        } else if let Some(found) = user_skills.iter().find(|u| self.is_partial_match(u, skill)) {
            (SkillStatus::Partial, Some(found.clone()))
        } else {
            (SkillStatus::Missing, None)
        };

        SkillGapItem {
            skill: skill.to_string(),
            status,
            matched_with,
            priority,
        }
    }
}
