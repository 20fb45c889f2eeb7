//! Pupil transfer objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PupilDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(
        required(message = "Pupil first name/last name required."),
        length(min = 1, message = "Pupil first name/last name required.")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "Pupil first name/last name required."),
        length(min = 1, message = "Pupil first name/last name required.")
    )]
    pub last_name: Option<String>,
}

/// Body of `POST /pupil/addPupilToTeacher`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PupilTeacherLink {
    #[validate(required(message = "Teacher ID and/or Pupil ID required."))]
    pub pupil_id: Option<i64>,
    #[validate(required(message = "Teacher ID and/or Pupil ID required."))]
    pub teacher_id: Option<i64>,
}
