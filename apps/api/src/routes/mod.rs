pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::critique::handlers as critique;
use crate::skills::handlers as skills;
use crate::state::AppState;

/// Headroom over the resume limit for JSON envelopes and multipart framing.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_resume_bytes.saturating_add(BODY_LIMIT_SLACK);

    Router::new()
        .route("/health", get(health::health_handler))
        // Skills API
        .route("/api/v1/skills/gap", post(skills::handle_skill_gap))
        .route("/api/v1/skills/compare", post(skills::handle_compare_jobs))
        // Resume critique API
        .route("/api/v1/resumes/critique", post(critique::handle_critique))
        .route(
            "/api/v1/resumes/critique/upload",
            post(critique::handle_critique_upload),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
