//! Resume critic — runs every check in order and scores the result.
//!
//! score = clamp(100 − 18·critical − 8·warning, 15, 100). Info issues are free.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::critique::checks::{CheckInput, CritiqueIssue, ResumeDoc, Rules, Severity, CHECKS};
use crate::models::job::JobPosting;
use crate::scoring::critique_score;

/// Full critique for one resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CritiqueResult {
    /// In check order, not severity order.
    pub issues: Vec<CritiqueIssue>,
    pub strengths: Vec<String>,
    pub score: u8, // 15 – 100
    pub critical_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
}

/// Owns the compiled rule set. Build once at startup and share.
#[derive(Debug, Clone)]
pub struct ResumeCritic {
    rules: Rules,
}

impl ResumeCritic {
    pub fn new() -> Result<Self> {
        let rules = Rules::compile().context("Failed to compile resume critique rules")?;
        Ok(Self { rules })
    }

    /// Critiques `resume_text`, checking role alignment when a target job is given.
    ///
    /// Total over all input, including the empty string.
    pub fn critique(&self, resume_text: &str, target_job: Option<&JobPosting>) -> CritiqueResult {
        let doc = ResumeDoc::new(resume_text);
        let input = CheckInput {
            doc: &doc,
            rules: &self.rules,
            target_job,
        };

        let mut issues = Vec::new();
        let mut strengths = Vec::new();
        for check in CHECKS {
            let findings = check(&input);
            issues.extend(findings.issues);
            strengths.extend(findings.strengths);
        }

        let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
        let critical_count = count(Severity::Critical);
        let warning_count = count(Severity::Warning);
        let info_count = count(Severity::Info);
        let score = critique_score(critical_count, warning_count);

        debug!(
            lines = doc.lines.len(),
            critical_count, warning_count, info_count, score, "resume critiqued"
        );

        CritiqueResult {
            issues,
            strengths,
            score,
            critical_count,
            warning_count,
            info_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critique::checks::IssueCategory;

    /// 14 non-blank lines: email, summary, skills, bullets, metrics, education.
    const STRONG_RESUME: &str = "\
Jane Doe
jane.doe@example.com
Summary
Backend engineer building payment infrastructure.
Experience
- Led migration of 40 services to Kubernetes
- Cut p99 latency by 35%
- Saved $120,000 in annual cloud spend
- Built ledger API serving 2M requests per day
- Mentored 6 engineers across 3 teams
Skills
Rust, Go, PostgreSQL, Kafka, SQL
Education
B.S. Computer Science, State University
";

    fn critic() -> ResumeCritic {
        ResumeCritic::new().unwrap()
    }

    fn categories(result: &CritiqueResult) -> Vec<IssueCategory> {
        result.issues.iter().map(|i| i.category).collect()
    }

    #[test]
    fn test_strong_resume_scores_full() {
        let r = critic().critique(STRONG_RESUME, None);
        assert!(r.issues.is_empty(), "unexpected issues: {:?}", r.issues);
        assert_eq!(r.score, 100);
        assert_eq!(
            r.strengths,
            vec![
                "Good length (14 lines)",
                "Uses quantified achievements",
                "Uses strong action verbs",
                "Includes contact information",
                "Has a summary section",
                "Has a dedicated skills section",
                "Uses bullet points for readability",
                "Includes education",
            ]
        );
    }

    #[test]
    fn test_minimal_resume() {
        let r = critic().critique("Helped with stuff.", None);
        assert_eq!(
            categories(&r),
            vec![
                IssueCategory::Length,
                IssueCategory::Impact,
                IssueCategory::ActionVerbs,
                IssueCategory::Contact,
                IssueCategory::Summary,
                IssueCategory::Skills,
                IssueCategory::Formatting,
            ]
        );
        assert!(r.issues[2].message.contains("helped"));
        assert_eq!(r.critical_count, 2);
        // too short + no email
        assert_eq!(r.warning_count, 2);
        assert_eq!(r.info_count, 3);
        assert_eq!(r.score, 100 - 18 * 2 - 8 * 2);
    }

    #[test]
    fn test_two_criticals_only_scores_64() {
        let text = STRONG_RESUME
            .replace("Led migration of 40 services", "Helped migrate our services")
            .replace("Cut p99 latency by 35%", "Cut p99 latency")
            .replace("Saved $120,000 in annual cloud spend", "Lowered annual cloud spend")
            .replace("serving 2M requests per day", "serving heavy traffic")
            .replace("Mentored 6 engineers across 3 teams", "Mentored engineers");
        let r = critic().critique(&text, None);
        assert_eq!(r.critical_count, 2, "issues: {:?}", r.issues);
        assert_eq!(r.warning_count, 0);
        assert_eq!(r.score, 64);
    }

    #[test]
    fn test_empty_text_degrades_gracefully() {
        let r = critic().critique("", None);
        assert_eq!(r.issues[0].category, IssueCategory::Length);
        assert!(r.strengths.contains(&"Uses strong action verbs".to_string()));
        assert_eq!(r.score, 100 - 18 - 8 * 2);
    }

    #[test]
    fn test_role_alignment_appended_last() {
        let job = JobPosting {
            title: Some("Data Engineer".to_string()),
            required_skills: vec!["SQL".to_string(), "Go".to_string()],
            ..Default::default()
        };
        let text = STRONG_RESUME.replace("Rust, Go, PostgreSQL", "Rust, PostgreSQL");
        let r = critic().critique(&text, Some(&job));
        let last = r.issues.last().unwrap();
        assert_eq!(last.category, IssueCategory::RoleAlignment);
        assert_eq!(last.severity, Severity::Critical);
        assert!(last.message.ends_with("Go"));
        assert_eq!(
            r.strengths.last().unwrap(),
            "Mentions 1/2 required skills for Data Engineer"
        );
        assert_eq!(r.score, 82);
    }

    #[test]
    fn test_empty_required_skills_skips_alignment() {
        let job = JobPosting::default();
        let with_job = critic().critique(STRONG_RESUME, Some(&job));
        let without = critic().critique(STRONG_RESUME, None);
        assert_eq!(with_job, without);
    }

    #[test]
    fn test_score_floor() {
        let text = "I was responsible for stuff. Passionate team player and hard worker.\n- a.\n- b\n- c";
        let job = JobPosting {
            required_skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let r = critic().critique(text, Some(&job));
        assert!(r.critical_count >= 3);
        assert_eq!(r.score, 15);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let c = critic();
        let inputs = [
            "",
            "\n\n\n",
            "@",
            "• • •",
            STRONG_RESUME,
            "worked helped used did made attended assisted participated",
        ];
        for text in inputs {
            let r = c.critique(text, None);
            assert!((15..=100).contains(&r.score), "score {} for {text:?}", r.score);
        }
    }

    #[test]
    fn test_deterministic() {
        let c = critic();
        assert_eq!(c.critique(STRONG_RESUME, None), c.critique(STRONG_RESUME, None));
    }
}
