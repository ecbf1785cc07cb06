//! Resume critique checks.
//!
//! Each check is independent and returns zero or more issues and strengths.
//! `CHECKS` fixes the order in which they run, which is also the order of
//! the output lists.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;

// ────────────────────────────────────────────────────────────────────────────
// Findings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Length,
    Impact,
    ActionVerbs,
    Cliches,
    Contact,
    Summary,
    Skills,
    Formatting,
    Consistency,
    Education,
    RoleAlignment,
}

/// One detected problem in a resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CritiqueIssue {
    pub category: IssueCategory,
    pub severity: Severity,
    pub message: String,
}

impl CritiqueIssue {
    fn new(category: IssueCategory, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
        }
    }
}

/// What a single check found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub issues: Vec<CritiqueIssue>,
    pub strengths: Vec<String>,
}

impl Findings {
    fn issue(category: IssueCategory, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            issues: vec![CritiqueIssue::new(category, severity, message)],
            strengths: vec![],
        }
    }

    fn strength(message: impl Into<String>) -> Self {
        Self {
            issues: vec![],
            strengths: vec![message.into()],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule data
// ────────────────────────────────────────────────────────────────────────────

pub const MIN_LINES: usize = 10;
pub const MAX_LINES: usize = 60;

/// Minimum bullet count before punctuation consistency is judged.
const PUNCTUATION_MIN_BULLETS: usize = 3;

pub const WEAK_VERBS: &[&str] = &[
    "worked",
    "helped",
    "used",
    "did",
    "made",
    "attended",
    "was responsible",
    "assisted",
    "participated",
];

pub const CLICHES: &[&str] = &[
    "fast-paced",
    "team player",
    "hard worker",
    "go-getter",
    "looking for a challenging role",
    "passionate",
    "detail-oriented",
    "self-starter",
    "results-driven",
];

const BULLET_MARKERS: &[char] = &['•', '-', '*'];

const QUANTIFIED_PATTERN: &str = r"\d+(?:\.\d+)?\s?%|\$\s?\d|\d[\d,.]*[km]?\+?\s*(?:users|customers|projects|teams|people|clients|requests|transactions|applications|endpoints|services)";
const SUMMARY_PATTERN: &str = r"summary|objective|profile|about";
const SKILLS_PATTERN: &str = r"skills|technologies|tech stack";
const EDUCATION_PATTERN: &str = r"education|university|degree|bachelor|master|phd|b\.s\.|m\.s\.";

/// Compiled, read-only rule set shared by every check.
#[derive(Debug, Clone)]
pub struct Rules {
    quantified: Regex,
    summary: Regex,
    skills: Regex,
    education: Regex,
}

impl Rules {
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            quantified: case_insensitive(QUANTIFIED_PATTERN)?,
            summary: case_insensitive(SUMMARY_PATTERN)?,
            skills: case_insensitive(SKILLS_PATTERN)?,
            education: case_insensitive(EDUCATION_PATTERN)?,
        })
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

// ────────────────────────────────────────────────────────────────────────────
// Check input
// ────────────────────────────────────────────────────────────────────────────

/// Resume text pre-split once for all checks.
#[derive(Debug)]
pub struct ResumeDoc<'a> {
    pub text: &'a str,
    pub lower: String,
    /// Non-blank lines, trimmed.
    pub lines: Vec<&'a str>,
}

impl<'a> ResumeDoc<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            lines: text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }

    /// Lines starting with `•`, `-` or `*`.
    pub fn bullets(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines
            .iter()
            .copied()
            .filter(|l| l.starts_with(BULLET_MARKERS))
    }
}

pub struct CheckInput<'a> {
    pub doc: &'a ResumeDoc<'a>,
    pub rules: &'a Rules,
    pub target_job: Option<&'a JobPosting>,
}

pub type Check = fn(&CheckInput<'_>) -> Findings;

/// Every check, in output order.
pub const CHECKS: &[Check] = &[
    check_length,
    check_quantified_impact,
    check_weak_verbs,
    check_cliches,
    check_contact_info,
    check_summary_section,
    check_skills_section,
    check_bullet_usage,
    check_bullet_punctuation,
    check_education_section,
    check_role_alignment,
];

// ────────────────────────────────────────────────────────────────────────────
// Checks
// ────────────────────────────────────────────────────────────────────────────

pub fn check_length(input: &CheckInput<'_>) -> Findings {
    let n = input.doc.lines.len();
    if n < MIN_LINES {
        Findings::issue(
            IssueCategory::Length,
            Severity::Warning,
            format!(
                "Resume looks too short ({n} lines). Add more detail on your experience and impact."
            ),
        )
    } else if n > MAX_LINES {
        Findings::issue(
            IssueCategory::Length,
            Severity::Warning,
            format!("Resume looks too long ({n} lines). Aim for one to two pages."),
        )
    } else {
        Findings::strength(format!("Good length ({n} lines)"))
    }
}

pub fn check_quantified_impact(input: &CheckInput<'_>) -> Findings {
    if input.rules.quantified.is_match(input.doc.text) {
        Findings::strength("Uses quantified achievements")
    } else {
        Findings::issue(
            IssueCategory::Impact,
            Severity::Critical,
            "No quantifiable metrics found. Add numbers, percentages, or dollar amounts to show impact.",
        )
    }
}

pub fn check_weak_verbs(input: &CheckInput<'_>) -> Findings {
    let found = scan(&input.doc.lower, WEAK_VERBS);
    if found.is_empty() {
        Findings::strength("Uses strong action verbs")
    } else {
        Findings::issue(
            IssueCategory::ActionVerbs,
            Severity::Critical,
            format!(
                "Weak action verbs found: {}. Replace them with verbs like led, built, or delivered.",
                found.join(", ")
            ),
        )
    }
}

pub fn check_cliches(input: &CheckInput<'_>) -> Findings {
    let found = scan(&input.doc.lower, CLICHES);
    if found.is_empty() {
        return Findings::default();
    }
    Findings::issue(
        IssueCategory::Cliches,
        Severity::Warning,
        format!(
            "Clichés detected: {}. Show these qualities through concrete results instead.",
            found.join(", ")
        ),
    )
}

pub fn check_contact_info(input: &CheckInput<'_>) -> Findings {
    if input.doc.text.contains('@') {
        Findings::strength("Includes contact information")
    } else {
        Findings::issue(
            IssueCategory::Contact,
            Severity::Warning,
            "No email address found. Put your contact details at the top.",
        )
    }
}

pub fn check_summary_section(input: &CheckInput<'_>) -> Findings {
    if input.rules.summary.is_match(input.doc.text) {
        Findings::strength("Has a summary section")
    } else {
        Findings::issue(
            IssueCategory::Summary,
            Severity::Info,
            "Consider adding a short professional summary at the top.",
        )
    }
}

pub fn check_skills_section(input: &CheckInput<'_>) -> Findings {
    if input.rules.skills.is_match(input.doc.text) {
        Findings::strength("Has a dedicated skills section")
    } else {
        Findings::issue(
            IssueCategory::Skills,
            Severity::Info,
            "Add a skills section listing your core technologies.",
        )
    }
}

pub fn check_bullet_usage(input: &CheckInput<'_>) -> Findings {
    if input.doc.bullets().next().is_some() {
        Findings::strength("Uses bullet points for readability")
    } else {
        Findings::issue(
            IssueCategory::Formatting,
            Severity::Info,
            "Use bullet points to make achievements easier to scan.",
        )
    }
}

pub fn check_bullet_punctuation(input: &CheckInput<'_>) -> Findings {
    let bullets: Vec<&str> = input.doc.bullets().collect();
    if bullets.len() < PUNCTUATION_MIN_BULLETS {
        return Findings::default();
    }
    let with_period = bullets.iter().filter(|b| b.ends_with('.')).count();
    if with_period == 0 || with_period == bullets.len() {
        return Findings::default();
    }
    Findings::issue(
        IssueCategory::Consistency,
        Severity::Warning,
        format!(
            "Inconsistent bullet punctuation: {with_period} of {} bullets end with a period.",
            bullets.len()
        ),
    )
}

pub fn check_education_section(input: &CheckInput<'_>) -> Findings {
    if input.rules.education.is_match(input.doc.text) {
        Findings::strength("Includes education")
    } else {
        Findings::default()
    }
}

pub fn check_role_alignment(input: &CheckInput<'_>) -> Findings {
    let Some(job) = input.target_job else {
        return Findings::default();
    };
    let required: Vec<&str> = job
        .required_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if required.is_empty() {
        return Findings::default();
    }

    let (mentioned, missing): (Vec<&str>, Vec<&str>) = required
        .iter()
        .copied()
        .partition(|skill| input.doc.lower.contains(&skill.to_lowercase()));

    let role = job.display_name();
    let mut findings = Findings::default();
    if !missing.is_empty() {
        findings.issues.push(CritiqueIssue::new(
            IssueCategory::RoleAlignment,
            Severity::Critical,
            format!("Missing required skills for {role}: {}", missing.join(", ")),
        ));
    }
    if !mentioned.is_empty() {
        findings.strengths.push(format!(
            "Mentions {}/{} required skills for {role}",
            mentioned.len(),
            required.len()
        ));
    }
    findings
}

/// Entries of `list` that occur in `lower_text`, in list order.
fn scan(lower_text: &str, list: &[&'static str]) -> Vec<&'static str> {
    list.iter()
        .copied()
        .filter(|needle| lower_text.contains(needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(check: Check, text: &str) -> Findings {
        run_with_job(check, text, None)
    }

    fn run_with_job(check: Check, text: &str, job: Option<&JobPosting>) -> Findings {
        let rules = Rules::compile().unwrap();
        let doc = ResumeDoc::new(text);
        check(&CheckInput {
            doc: &doc,
            rules: &rules,
            target_job: job,
        })
    }

    fn lines(n: usize) -> String {
        (0..n).map(|i| format!("line {i}\n")).collect()
    }

    #[test]
    fn test_rules_compile() {
        assert!(Rules::compile().is_ok());
    }

    #[test]
    fn test_doc_ignores_blank_lines() {
        let doc = ResumeDoc::new("a\n\n   \n b \r\n");
        assert_eq!(doc.lines, vec!["a", "b"]);
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(run(check_length, &lines(9)).issues[0].severity, Severity::Warning);
        assert!(run(check_length, &lines(9)).issues[0].message.contains("too short"));
        assert_eq!(run(check_length, &lines(10)).strengths, vec!["Good length (10 lines)"]);
        assert_eq!(run(check_length, &lines(60)).strengths.len(), 1);
        assert!(run(check_length, &lines(61)).issues[0].message.contains("too long"));
    }

    #[test]
    fn test_length_empty_text_is_too_short() {
        let f = run(check_length, "");
        assert_eq!(f.issues.len(), 1);
        assert!(f.issues[0].message.contains("(0 lines)"));
    }

    #[test]
    fn test_quantified_variants() {
        for text in [
            "Cut latency by 40%",
            "Saved $50,000 a year",
            "Served 200 customers",
            "Onboarded 10k+ users",
            "Maintained 12 SERVICES",
        ] {
            let f = run(check_quantified_impact, text);
            assert!(f.issues.is_empty(), "expected metric in {text:?}");
        }
    }

    #[test]
    fn test_unquantified_is_critical() {
        let f = run(check_quantified_impact, "Built many services for users");
        assert_eq!(f.issues[0].severity, Severity::Critical);
        assert_eq!(f.issues[0].category, IssueCategory::Impact);
    }

    #[test]
    fn test_weak_verbs_listed_in_order() {
        let f = run(check_weak_verbs, "Used Kafka. HELPED the team. Worked nights.");
        assert_eq!(f.issues.len(), 1);
        assert!(f.issues[0].message.contains("worked, helped, used"));
    }

    #[test]
    fn test_weak_verbs_substring_semantics() {
        // "focused" contains "used"
        let f = run(check_weak_verbs, "Focused on reliability");
        assert!(f.issues[0].message.contains("used"));
    }

    #[test]
    fn test_strong_verbs_strength() {
        let f = run(check_weak_verbs, "Led migration. Built pipeline.");
        assert!(f.issues.is_empty());
        assert_eq!(f.strengths, vec!["Uses strong action verbs"]);
    }

    #[test]
    fn test_cliches_warn_without_strength() {
        let f = run(check_cliches, "A passionate Team Player.");
        assert_eq!(f.issues[0].severity, Severity::Warning);
        assert!(f.issues[0].message.contains("team player, passionate"));
        assert_eq!(run(check_cliches, "Shipped things."), Findings::default());
    }

    #[test]
    fn test_contact_info() {
        assert_eq!(run(check_contact_info, "no email here").issues.len(), 1);
        assert_eq!(run(check_contact_info, "me@example.com").strengths.len(), 1);
    }

    #[test]
    fn test_sections_info_when_absent() {
        let f = run(check_summary_section, "Experience");
        assert_eq!(f.issues[0].severity, Severity::Info);
        assert_eq!(run(check_summary_section, "PROFILE").strengths.len(), 1);
        assert_eq!(run(check_skills_section, "Tech Stack: Rust").strengths.len(), 1);
        assert_eq!(run(check_skills_section, "Experience").issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_bullet_usage() {
        assert_eq!(run(check_bullet_usage, "  • Led team").strengths.len(), 1);
        assert_eq!(run(check_bullet_usage, "* Led team").strengths.len(), 1);
        assert_eq!(run(check_bullet_usage, "Led team").issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_bullet_punctuation_mixed() {
        let f = run(check_bullet_punctuation, "- One.\n- Two\n- Three.");
        assert_eq!(f.issues.len(), 1);
        assert_eq!(f.issues[0].category, IssueCategory::Consistency);
        assert!(f.issues[0].message.contains("2 of 3"));
    }

    #[test]
    fn test_bullet_punctuation_consistent_or_too_few() {
        assert!(run(check_bullet_punctuation, "- One.\n- Two.\n- Three.").issues.is_empty());
        assert!(run(check_bullet_punctuation, "- One\n- Two\n- Three").issues.is_empty());
        assert!(run(check_bullet_punctuation, "- One.\n- Two").issues.is_empty());
    }

    #[test]
    fn test_education_strength_only() {
        assert_eq!(run(check_education_section, "B.S. Computer Science").strengths.len(), 1);
        assert_eq!(run(check_education_section, "Self taught"), Findings::default());
    }

    #[test]
    fn test_role_alignment_skipped_without_job() {
        assert_eq!(run(check_role_alignment, "SQL"), Findings::default());
        let job = JobPosting {
            required_skills: vec!["  ".to_string()],
            ..Default::default()
        };
        assert_eq!(run_with_job(check_role_alignment, "SQL", Some(&job)), Findings::default());
    }

    #[test]
    fn test_role_alignment_partial() {
        let job = JobPosting {
            required_skills: vec!["SQL".to_string(), "Go".to_string()],
            ..Default::default()
        };
        let f = run_with_job(check_role_alignment, "Wrote sql reports", Some(&job));
        assert_eq!(f.issues.len(), 1);
        assert_eq!(f.issues[0].severity, Severity::Critical);
        assert!(f.issues[0].message.ends_with(": Go"));
        assert_eq!(f.strengths, vec!["Mentions 1/2 required skills for the target role"]);
    }

    #[test]
    fn test_role_alignment_none_mentioned_has_no_strength() {
        let job = JobPosting {
            required_skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let f = run_with_job(check_role_alignment, "Python", Some(&job));
        assert_eq!(f.issues.len(), 1);
        assert!(f.strengths.is_empty());
    }

    #[test]
    fn test_check_order() {
        assert_eq!(CHECKS.len(), 11);
    }
}
