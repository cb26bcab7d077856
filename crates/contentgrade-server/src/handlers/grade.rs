//! Grading handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::schema::grade::{GradeRequest, GradeResult};
use crate::state::AppState;

/// Grades inline content or the text of a fetched page.
///
/// `POST /api/grade`
///
/// The body is read as JSON regardless of `Content-Type`. An empty body is a
/// request with neither `content` nor `url`.
#[tracing::instrument(name = "grade", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn grade(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GradeResult>, ApiError> {
    let req = parse_body(&body)?;
    let result = state.grading.grade(&req).await?;
    Ok(Json(result))
}

/// Fallback for every non-POST method on the grading route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn parse_body(body: &[u8]) -> Result<GradeRequest, ApiError> {
    if body.trim_ascii().is_empty() {
        return Ok(GradeRequest::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        tracing::info!(reason = %err, "rejected request body");
        ApiError::InvalidBody(err.to_string())
    })
}
