//! HTTP handlers for the student routes.
//!
//! Handlers are direct adapters: decode path and body, delegate to
//! [`StudentService`], serialize the result. Authentication and the admin
//! role check happen in the route layer before a handler runs.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::modules::students::model::{Student, StudentPayload};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[instrument(skip(state, payload))]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::create(state.students.as_ref(), payload).await?;
    Ok(Json(student))
}

#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_all(state.students.as_ref()).await?;
    Ok(Json(students))
}

#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_by_id(state.students.as_ref(), id).await?;
    Ok(Json(student))
}

#[instrument(skip(state, payload))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update(state.students.as_ref(), id, payload).await?;
    Ok(Json(student))
}

#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(), AppError> {
    StudentService::delete(state.students.as_ref(), id).await
}
