//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, pupils, schools, teachers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Registry API",
        version = "1.0.0",
        description = "Schools, teachers and pupils REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Schools
        schools::list_schools,
        schools::get_school,
        schools::create_school,
        schools::update_school,
        schools::delete_school,
        // Teachers
        teachers::list_teachers,
        teachers::get_teacher,
        teachers::create_teacher,
        teachers::update_teacher,
        teachers::delete_teacher,
        // Pupils
        pupils::list_pupils,
        pupils::get_pupil,
        pupils::create_pupil,
        pupils::update_pupil,
        pupils::delete_pupil,
        pupils::add_pupil_to_teacher,
        pupils::list_pupils_by_teacher,
        pupils::list_teachers_by_pupil,
        pupils::remove_pupil_from_teacher,
    ),
    components(
        schemas(
            crate::dto::SchoolDto,
            crate::dto::TeacherDto,
            crate::dto::PupilDto,
            crate::dto::PupilTeacherLink,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "school", description = "School management"),
        (name = "teacher", description = "Teacher management"),
        (name = "pupil", description = "Pupil management and pupil-teacher links")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
