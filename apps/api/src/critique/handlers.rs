//! Axum route handlers for the Resume Critique API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::critique::engine::CritiqueResult;
use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::state::AppState;

const PDF_MAGIC: &[u8] = b"%PDF";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Deserialize)]
pub struct CritiqueRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub target_job: Option<JobPosting>,
}

/// POST /api/v1/resumes/critique
///
/// Runs the rule-based critique over plain resume text.
pub async fn handle_critique(
    State(state): State<AppState>,
    Json(request): Json<CritiqueRequest>,
) -> Result<Json<CritiqueResult>, AppError> {
    ensure_within_limit(request.resume_text.len(), state.config.max_resume_bytes)?;

    let result = state
        .critic
        .critique(&request.resume_text, request.target_job.as_ref());

    info!(
        "Critiqued resume: score {} ({} issues, {} strengths)",
        result.score,
        result.issues.len(),
        result.strengths.len()
    );

    Ok(Json(result))
}

/// POST /api/v1/resumes/critique/upload
///
/// Multipart form: `resume` (PDF or UTF-8 text file), optional `target_job` (JSON).
pub async fn handle_critique_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CritiqueResult>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut target_job: Option<JobPosting> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                ensure_within_limit(bytes.len(), state.config.max_resume_bytes)?;
                resume_text = Some(extract_resume_text(bytes.to_vec(), content_type).await?);
            }
            Some("target_job") => {
                let raw = field.text().await?;
                let job = serde_json::from_str::<JobPosting>(&raw).map_err(|e| {
                    AppError::Validation(format!("target_job is not a valid job: {e}"))
                })?;
                target_job = Some(job);
            }
            _ => {}
        }
    }

    let resume_text =
        resume_text.ok_or_else(|| AppError::Validation("missing 'resume' field".to_string()))?;

    let result = state.critic.critique(&resume_text, target_job.as_ref());

    info!(
        "Critiqued uploaded resume: score {} ({} issues)",
        result.score,
        result.issues.len()
    );

    Ok(Json(result))
}

fn ensure_within_limit(len: usize, limit: usize) -> Result<(), AppError> {
    if len > limit {
        return Err(AppError::PayloadTooLarge(format!(
            "resume is {len} bytes; the limit is {limit}"
        )));
    }
    Ok(())
}

fn is_pdf(bytes: &[u8], content_type: Option<&str>) -> bool {
    content_type == Some(PDF_CONTENT_TYPE) || bytes.starts_with(PDF_MAGIC)
}

/// PDF text is extracted off the async runtime; anything else must be UTF-8.
async fn extract_resume_text(
    bytes: Vec<u8>,
    content_type: Option<String>,
) -> Result<String, AppError> {
    if !is_pdf(&bytes, content_type.as_deref()) {
        return String::from_utf8(bytes).map_err(|_| {
            AppError::UnprocessableEntity("resume must be a PDF or a UTF-8 text file".to_string())
        });
    }

    match tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await {
        Ok(extracted) => extracted
            .map_err(|e| AppError::UnprocessableEntity(format!("could not read PDF: {e}"))),
        // the PDF parser panics on some malformed input
        Err(e) if e.is_panic() => {
            warn!("PDF extraction panicked");
            Err(AppError::UnprocessableEntity("could not read PDF".to_string()))
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context("PDF extraction task failed")
            .into()),
    }
}
