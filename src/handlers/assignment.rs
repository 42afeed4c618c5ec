//! Assignment handlers.
//!
//! Only create and the per-course listing recover from storage failures;
//! update, status update and delete let the error reach the server-level
//! fallback in [`StorageError`].

use crate::error::{AppError, StorageError, StorageResultExt};
use crate::extractors::JsonBody;
use crate::response::{row_or_empty, rows};
use crate::sql::{statements, TextParam};
use crate::state::AppState;
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// POST /assignments
pub async fn create_assignment(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Response, AppError> {
    let params = [
        TextParam::field(&body, "course_id"),
        TextParam::field(&body, "title"),
        TextParam::field(&body, "due_date"),
    ];
    let row = store::query_one(&state.pool, statements::INSERT_ASSIGNMENT, &params)
        .await
        .or_text("Error creating assignment")?;
    Ok(row_or_empty(StatusCode::CREATED, row))
}

/// PATCH /assignments
pub async fn update_assignment(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Response, StorageError> {
    let params = [
        TextParam::field(&body, "title"),
        TextParam::field(&body, "due_date"),
        TextParam::field(&body, "id"),
    ];
    let row = store::query_one(&state.pool, statements::UPDATE_ASSIGNMENT, &params).await?;
    Ok(row_or_empty(StatusCode::OK, row))
}

/// DELETE /assignment/:id. The id is bound as received.
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, StorageError> {
    let row = store::query_one(&state.pool, statements::DELETE_ASSIGNMENT, &[TextParam::text(id)]).await?;
    Ok(row_or_empty(StatusCode::OK, row))
}

/// PATCH /assignments/:id. Changes `status` only.
pub async fn update_assignment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Response, StorageError> {
    let params = [TextParam::field(&body, "status"), TextParam::text(id)];
    let row = store::query_one(&state.pool, statements::UPDATE_ASSIGNMENT_STATUS, &params).await?;
    Ok(row_or_empty(StatusCode::OK, row))
}

/// GET /courses/:courseId/assignments
pub async fn list_course_assignments(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = store::query(
        &state.pool,
        statements::SELECT_ASSIGNMENTS_FOR_COURSE,
        &[TextParam::numeric(&course_id)],
    )
    .await
    .or_json("Error fetching assignments for course")?;
    Ok(rows(data))
}
