//! API handlers for the school registry REST endpoints

pub mod health;
pub mod openapi;
pub mod pupils;
pub mod schools;
pub mod teachers;

use axum::{
    body::Bytes,
    routing::{delete, get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Collection paths accept an optional trailing slash
    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        // Schools
        .route("/school", schools::collection())
        .route("/school/", schools::collection())
        .route(
            "/school/:id",
            get(schools::get_school)
                .put(schools::update_school)
                .delete(schools::delete_school),
        )
        // Teachers
        .route("/teacher", teachers::collection())
        .route("/teacher/", teachers::collection())
        .route(
            "/teacher/:id",
            get(teachers::get_teacher)
                .put(teachers::update_teacher)
                .delete(teachers::delete_teacher),
        )
        // Pupils
        .route("/pupil", pupils::collection())
        .route("/pupil/", pupils::collection())
        .route("/pupil/addPupilToTeacher", post(pupils::add_pupil_to_teacher))
        .route(
            "/pupil/:id",
            get(pupils::get_pupil)
                .put(pupils::update_pupil)
                .delete(pupils::delete_pupil),
        )
        .route("/pupil/:id/teachers", get(pupils::list_pupils_by_teacher))
        .route("/pupil/:id/teacherList", get(pupils::list_teachers_by_pupil))
        .route(
            "/pupil/:id/teachers/:teacher_id",
            delete(pupils::remove_pupil_from_teacher),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Parse a numeric path segment, reporting `message` when it is not one
pub(crate) fn parse_id(raw: &str, message: &str) -> AppResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(message.to_string()))
}

/// Decode a JSON request body; an empty body decodes to the default value so
/// that it fails field validation like a body with every field missing
pub(crate) fn parse_body<T>(body: &Bytes) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12", "Invalid school ID.").unwrap(), 12);
        match parse_id("abc", "Invalid school ID.") {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid school ID."),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_body_as_default() {
        let dto: crate::dto::PupilDto = parse_body(&Bytes::new()).unwrap();
        assert_eq!(dto, crate::dto::PupilDto::default());
    }

    #[test]
    fn test_parse_malformed_body() {
        let result: AppResult<crate::dto::PupilDto> = parse_body(&Bytes::from_static(b"{not json"));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
