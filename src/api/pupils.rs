//! Pupil API endpoints, including pupil-teacher links

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json,
};

use super::{parse_body, parse_id};
use crate::{
    dto::{validate_body, PupilDto, PupilTeacherLink, TeacherDto},
    error::{AppError, AppResult},
    AppState,
};

const INVALID_ID: &str = "Invalid pupil ID.";
const ID_REQUIRED: &str = "Pupil ID required.";
const INVALID_LINK: &str = "Invalid Teacher and/or Pupil ID.";

pub(super) fn collection() -> MethodRouter<AppState> {
    get(list_pupils)
        .post(create_pupil)
        .put(id_required)
        .delete(id_required)
}

/// List all pupils
#[utoipa::path(
    get,
    path = "/pupil",
    tag = "pupil",
    responses(
        (status = 200, description = "Pupil list", body = Vec<PupilDto>)
    )
)]
pub async fn list_pupils(State(state): State<AppState>) -> AppResult<Json<Vec<PupilDto>>> {
    let pupils = state.services.pupils.get_all().await?;
    Ok(Json(pupils))
}

/// Get pupil by ID; `null` when it does not exist
#[utoipa::path(
    get,
    path = "/pupil/{id}",
    tag = "pupil",
    params(("id" = i64, Path, description = "Pupil ID")),
    responses(
        (status = 200, description = "Pupil details, or null", body = PupilDto),
        (status = 400, description = "Invalid pupil ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_pupil(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<PupilDto>>> {
    let id = parse_id(&id, INVALID_ID)?;
    let pupil = state.services.pupils.get_by_id(id).await?;
    Ok(Json(pupil))
}

/// Create a pupil
#[utoipa::path(
    post,
    path = "/pupil",
    tag = "pupil",
    request_body = PupilDto,
    responses(
        (status = 201, description = "Pupil created", body = PupilDto),
        (status = 400, description = "First name or last name missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_pupil(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<PupilDto>)> {
    let dto: PupilDto = parse_body(&body)?;
    validate_body(&dto)?;
    let pupil = state.services.pupils.save(dto).await?;
    Ok((StatusCode::CREATED, Json(pupil)))
}

/// Replace a pupil's names
#[utoipa::path(
    put,
    path = "/pupil/{id}",
    tag = "pupil",
    params(("id" = i64, Path, description = "Pupil ID")),
    request_body = PupilDto,
    responses(
        (status = 201, description = "Pupil updated", body = PupilDto),
        (status = 400, description = "Invalid ID or missing fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_pupil(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<PupilDto>)> {
    let id = parse_id(&id, INVALID_ID)?;
    let mut dto: PupilDto = parse_body(&body)?;
    dto.id = Some(id);
    validate_body(&dto)?;
    let pupil = state.services.pupils.update(dto).await?;
    Ok((StatusCode::CREATED, Json(pupil)))
}

/// Delete a pupil and its teacher links
#[utoipa::path(
    delete,
    path = "/pupil/{id}",
    tag = "pupil",
    params(("id" = i64, Path, description = "Pupil ID")),
    responses(
        (status = 204, description = "Pupil deleted"),
        (status = 400, description = "Invalid pupil ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_pupil(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, INVALID_ID)?;
    state.services.pupils.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the pupils of a teacher
#[utoipa::path(
    get,
    path = "/pupil/{teacherId}/teachers",
    tag = "pupil",
    params(("teacherId" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Pupils linked to the teacher", body = Vec<PupilDto>)
    )
)]
pub async fn list_pupils_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> AppResult<Json<Vec<PupilDto>>> {
    let teacher_id = parse_id(&teacher_id, INVALID_ID)?;
    let pupils = state.services.pupils.get_all_pupils_by_teacher(teacher_id).await?;
    Ok(Json(pupils))
}

/// List the teachers of a pupil
#[utoipa::path(
    get,
    path = "/pupil/{pupilId}/teacherList",
    tag = "pupil",
    params(("pupilId" = i64, Path, description = "Pupil ID")),
    responses(
        (status = 200, description = "Teachers linked to the pupil", body = Vec<TeacherDto>)
    )
)]
pub async fn list_teachers_by_pupil(
    State(state): State<AppState>,
    Path(pupil_id): Path<String>,
) -> AppResult<Json<Vec<TeacherDto>>> {
    let pupil_id = parse_id(&pupil_id, INVALID_ID)?;
    let teachers = state.services.pupils.get_all_teachers_by_pupil(pupil_id).await?;
    Ok(Json(teachers))
}

/// Link a pupil to a teacher
#[utoipa::path(
    post,
    path = "/pupil/addPupilToTeacher",
    tag = "pupil",
    request_body = PupilTeacherLink,
    responses(
        (status = 204, description = "Pupil linked to teacher"),
        (status = 400, description = "Missing or invalid IDs", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_pupil_to_teacher(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let link: PupilTeacherLink =
        parse_body(&body).map_err(|_| AppError::BadRequest(INVALID_LINK.to_string()))?;
    validate_body(&link)?;

    let (Some(pupil_id), Some(teacher_id)) = (link.pupil_id, link.teacher_id) else {
        return Err(AppError::Validation("Teacher ID and/or Pupil ID required.".to_string()));
    };
    state.services.pupils.add_pupil_to_teacher(pupil_id, teacher_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Unlink a pupil from a teacher
#[utoipa::path(
    delete,
    path = "/pupil/{pupilId}/teachers/{teacherId}",
    tag = "pupil",
    params(
        ("pupilId" = i64, Path, description = "Pupil ID"),
        ("teacherId" = i64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 204, description = "Pupil unlinked from teacher"),
        (status = 400, description = "Invalid IDs", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_pupil_from_teacher(
    State(state): State<AppState>,
    Path((pupil_id, teacher_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let pupil_id = parse_id(&pupil_id, INVALID_LINK)?;
    let teacher_id = parse_id(&teacher_id, INVALID_LINK)?;
    state.services.pupils.remove_pupil_from_teacher(pupil_id, teacher_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn id_required() -> AppError {
    AppError::Validation(ID_REQUIRED.to_string())
}
