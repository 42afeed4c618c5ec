//! Course handlers: list, create, full update, delete.

use crate::error::{AppError, StorageResultExt};
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

/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = store::query(&state.pool, statements::SELECT_COURSES, &[])
        .await
        .or_json("Error fetching courses")?;
    Ok(rows(data))
}

/// POST /courses
pub async fn create_course(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Response, AppError> {
    let params = [
        TextParam::field(&body, "course_name"),
        TextParam::field(&body, "professor"),
        TextParam::field(&body, "start_date"),
        TextParam::field(&body, "end_date"),
    ];
    let row = store::query_one(&state.pool, statements::INSERT_COURSE, &params)
        .await
        .or_json("Error adding course")?;
    Ok(row_or_empty(StatusCode::CREATED, row))
}

/// PATCH /course. Answers 201 even though it is an update.
pub async fn update_course(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Response, AppError> {
    let params = [
        TextParam::field(&body, "course_name"),
        TextParam::field(&body, "professor"),
        TextParam::field(&body, "start_date"),
        TextParam::field(&body, "end_date"),
        TextParam::field(&body, "id"),
    ];
    let row = store::query_one(&state.pool, statements::UPDATE_COURSE, &params)
        .await
        .or_json("Failed to update course")?;
    Ok(row_or_empty(StatusCode::CREATED, row))
}

/// DELETE /course/:courseId
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Response, AppError> {
    let row = store::query_one(&state.pool, statements::DELETE_COURSE, &[TextParam::numeric(&course_id)])
        .await
        .or_text("Failed to delete course")?;
    Ok(row_or_empty(StatusCode::OK, row))
}
