//! School API endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json,
};

use super::{parse_body, parse_id};
use crate::{
    dto::{validate_body, SchoolDto},
    error::{AppError, AppResult},
    AppState,
};

const INVALID_ID: &str = "Invalid school ID.";
const ID_REQUIRED: &str = "School ID required.";

/// Routes served on the bare collection path
pub(super) fn collection() -> MethodRouter<AppState> {
    get(list_schools)
        .post(create_school)
        .put(id_required)
        .delete(id_required)
}

/// List all schools with their teachers
#[utoipa::path(
    get,
    path = "/school",
    tag = "school",
    responses(
        (status = 200, description = "School list", body = Vec<SchoolDto>)
    )
)]
pub async fn list_schools(State(state): State<AppState>) -> AppResult<Json<Vec<SchoolDto>>> {
    let schools = state.services.schools.get_all().await?;
    Ok(Json(schools))
}

/// Get school by ID; `null` when it does not exist
#[utoipa::path(
    get,
    path = "/school/{id}",
    tag = "school",
    params(("id" = i64, Path, description = "School ID")),
    responses(
        (status = 200, description = "School details, or null", body = SchoolDto),
        (status = 400, description = "Invalid school ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<SchoolDto>>> {
    let id = parse_id(&id, INVALID_ID)?;
    let school = state.services.schools.get_by_id(id).await?;
    Ok(Json(school))
}

/// Create a school
#[utoipa::path(
    post,
    path = "/school",
    tag = "school",
    request_body = SchoolDto,
    responses(
        (status = 201, description = "School created", body = SchoolDto),
        (status = 400, description = "Name and/or address missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_school(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<SchoolDto>)> {
    let dto: SchoolDto = parse_body(&body)?;
    validate_body(&dto)?;
    let school = state.services.schools.save(dto).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

/// Replace a school's name and address
#[utoipa::path(
    put,
    path = "/school/{id}",
    tag = "school",
    params(("id" = i64, Path, description = "School ID")),
    request_body = SchoolDto,
    responses(
        (status = 201, description = "School updated", body = SchoolDto),
        (status = 400, description = "Invalid ID or missing fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_school(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<SchoolDto>)> {
    let id = parse_id(&id, INVALID_ID)?;
    let mut dto: SchoolDto = parse_body(&body)?;
    dto.id = Some(id);
    validate_body(&dto)?;
    let school = state.services.schools.update(dto).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

/// Delete a school
#[utoipa::path(
    delete,
    path = "/school/{id}",
    tag = "school",
    params(("id" = i64, Path, description = "School ID")),
    responses(
        (status = 204, description = "School deleted"),
        (status = 400, description = "Invalid school ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_school(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, INVALID_ID)?;
    state.services.schools.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn id_required() -> AppError {
    AppError::Validation(ID_REQUIRED.to_string())
}
