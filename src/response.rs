//! Response helpers for row-returning statements.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// The row under `status`, or `status` with an empty body when the statement
/// matched no row.
pub fn row_or_empty(status: StatusCode, row: Option<Value>) -> Response {
    match row {
        Some(row) => (status, Json(row)).into_response(),
        None => status.into_response(),
    }
}

pub fn rows(data: Vec<Value>) -> (StatusCode, Json<Vec<Value>>) {
    (StatusCode::OK, Json(data))
}
