use std::sync::Arc;

use crate::config::Config;
use crate::critique::engine::ResumeCritic;
use crate::skills::normalize::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built-in alias table; immutable for the process lifetime.
    pub skill_matcher: Arc<SkillMatcher>,
    /// Compiled critique rules, built once at startup.
    pub critic: Arc<ResumeCritic>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(AppState {
            config,
            skill_matcher: Arc::new(SkillMatcher::default()),
            critic: Arc::new(ResumeCritic::new()?),
        })
    }
}
