use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job record as supplied by the job-tracking client.
///
/// Only the fields the matching core reads are modelled here. Absent skill
/// lists deserialize as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
}

impl JobPosting {
    /// Human label used in critique messages and comparison output.
    pub fn display_name(&self) -> String {
        match (self.title.as_deref(), self.company.as_deref()) {
            (Some(title), Some(company)) => format!("{title} at {company}"),
            (Some(title), None) => title.to_string(),
            (None, Some(company)) => format!("the {company} role"),
            (None, None) => "the target role".to_string(),
        }
    }
}
