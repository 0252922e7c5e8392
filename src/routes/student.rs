//! Student CRUD routes under `/etudiants`.

use crate::handlers::student::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const STUDENTS_PATH: &str = "/etudiants";

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route(STUDENTS_PATH, get(list).post(create))
        .route(
            &format!("{}/:id", STUDENTS_PATH),
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
