//! Teacher API endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json,
};

use super::{parse_body, parse_id};
use crate::{
    dto::{validate_body, TeacherDto},
    error::{AppError, AppResult},
    AppState,
};

const INVALID_ID: &str = "Invalid teacher ID.";
const ID_REQUIRED: &str = "Teacher ID required.";

pub(super) fn collection() -> MethodRouter<AppState> {
    get(list_teachers)
        .post(create_teacher)
        .put(id_required)
        .delete(id_required)
}

/// List all teachers
#[utoipa::path(
    get,
    path = "/teacher",
    tag = "teacher",
    responses(
        (status = 200, description = "Teacher list", body = Vec<TeacherDto>)
    )
)]
pub async fn list_teachers(State(state): State<AppState>) -> AppResult<Json<Vec<TeacherDto>>> {
    let teachers = state.services.teachers.get_all().await?;
    Ok(Json(teachers))
}

/// Get teacher by ID; `null` when it does not exist
#[utoipa::path(
    get,
    path = "/teacher/{id}",
    tag = "teacher",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher details, or null", body = TeacherDto),
        (status = 400, description = "Invalid teacher ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<TeacherDto>>> {
    let id = parse_id(&id, INVALID_ID)?;
    let teacher = state.services.teachers.get_by_id(id).await?;
    Ok(Json(teacher))
}

/// Create a teacher
///
/// `schoolId` must reference an existing school; the database rejects it
/// otherwise.
#[utoipa::path(
    post,
    path = "/teacher",
    tag = "teacher",
    request_body = TeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = TeacherDto),
        (status = 400, description = "First name or last name missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<TeacherDto>)> {
    let dto: TeacherDto = parse_body(&body)?;
    validate_body(&dto)?;
    let teacher = state.services.teachers.save(dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// Replace a teacher's names and school
#[utoipa::path(
    put,
    path = "/teacher/{id}",
    tag = "teacher",
    params(("id" = i64, Path, description = "Teacher ID")),
    request_body = TeacherDto,
    responses(
        (status = 201, description = "Teacher updated", body = TeacherDto),
        (status = 400, description = "Invalid ID or missing fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<TeacherDto>)> {
    let id = parse_id(&id, INVALID_ID)?;
    let mut dto: TeacherDto = parse_body(&body)?;
    dto.id = Some(id);
    validate_body(&dto)?;
    let teacher = state.services.teachers.update(dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// Delete a teacher and its pupil links
#[utoipa::path(
    delete,
    path = "/teacher/{id}",
    tag = "teacher",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 400, description = "Invalid teacher ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, INVALID_ID)?;
    state.services.teachers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn id_required() -> AppError {
    AppError::Validation(ID_REQUIRED.to_string())
}
