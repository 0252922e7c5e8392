//! Student CRUD handlers: list, read, create, update, delete.

use crate::config::AbsentRecordMode;
use crate::error::AppError;
use crate::model::{Student, StudentId};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Apply the configured policy for a record that may not exist.
fn present_or_absent(
    row: Option<Student>,
    id: StudentId,
    mode: AbsentRecordMode,
) -> Result<Option<Student>, AppError> {
    match (row, mode) {
        (Some(student), _) => Ok(Some(student)),
        (None, AbsentRecordMode::Null) => Ok(None),
        (None, AbsentRecordMode::NotFound) => Err(AppError::NotFound(format!("student {}", id))),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let rows = state.students.get_all().await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> Result<Json<Option<Student>>, AppError> {
    let row = state.students.get_by_id(id).await?;
    present_or_absent(row, id, state.absent_records).map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Student>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let row = state.students.create(body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(body): Json<Student>,
) -> Result<Json<Option<Student>>, AppError> {
    let row = state.students.update(id, body).await?;
    present_or_absent(row, id, state.absent_records).map(Json)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> Result<StatusCode, AppError> {
    state.students.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
