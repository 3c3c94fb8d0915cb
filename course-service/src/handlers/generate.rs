use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use service_core::error::AppError;

/// Certification label every generated outline claims alignment with.
pub const ALIGNMENT_LABEL: &str = "Industry Standard ISO-27001";

/// Inbound course request. Both fields are optional on the wire: a missing
/// title echoes back as the empty string, level is accepted but unconstrained.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateCourseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CourseOutline {
    pub course_name: String,
    pub content: String,
    pub alignment: String,
}

/// Mock outline body. A real generator would call a model provider here;
/// the current contract is the fixed two-week template.
pub fn outline_content(title: &str) -> String {
    format!(
        "Week 1: Introduction to {}\nWeek 2: Core Concepts...",
        title
    )
}

/// `POST /api/generate`
///
/// The response is a pure function of the request body. Any body that fails
/// to deserialize (bad syntax, wrong types, wrong content type) is the one
/// error path and comes back as 400 with the parse failure text, overriding
/// axum's default 415/422 rejection statuses.
#[tracing::instrument(skip(payload))]
pub async fn generate_course(
    payload: Result<Json<GenerateCourseRequest>, JsonRejection>,
) -> Result<Json<CourseOutline>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::BadRequest(anyhow::anyhow!(rejection.body_text())))?;

    tracing::debug!(
        title = %request.title,
        level = ?request.level,
        "Generating course outline"
    );

    Ok(Json(CourseOutline {
        course_name: request.title.clone(),
        content: outline_content(&request.title),
        alignment: ALIGNMENT_LABEL.to_string(),
    }))
}
