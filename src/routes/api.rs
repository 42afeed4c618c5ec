//! Course and assignment routes.

use crate::handlers::{
    create_assignment, create_course, delete_assignment, delete_course, list_course_assignments,
    list_courses, update_assignment, update_assignment_status, update_course,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/course", patch(update_course))
        .route("/course/:courseId", delete(delete_course))
        .route("/assignments", patch(update_assignment).post(create_assignment))
        .route("/assignment/:id", delete(delete_assignment))
        .route("/assignments/:id", patch(update_assignment_status))
        .route("/courses/:courseId/assignments", get(list_course_assignments))
        .with_state(state)
}
