use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use dreamscape_core::models::request::ReportSubmission;

use crate::error::ApiError;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "PDFs generated successfully";

#[derive(Serialize)]
pub struct GenerateReportsResponse {
    pub message: &'static str,
}

/// Draft, render, and write both PDFs for one submission.
///
/// A body that is not JSON, or whose fields have the wrong types, is
/// treated the same as an incomplete one.
pub async fn generate_reports(
    State(state): State<AppState>,
    body: Result<Json<ReportSubmission>, JsonRejection>,
) -> Result<Json<GenerateReportsResponse>, ApiError> {
    let Json(submission) = body?;
    state.service.generate(submission).await?;
    Ok(Json(GenerateReportsResponse {
        message: SUCCESS_MESSAGE,
    }))
}
