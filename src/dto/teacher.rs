//! Teacher transfer object

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(
        required(message = "Teacher first name/ last name required."),
        length(min = 1, message = "Teacher first name/ last name required.")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "Teacher first name/ last name required."),
        length(min = 1, message = "Teacher first name/ last name required.")
    )]
    pub last_name: Option<String>,
    /// Owning school, flattened to its key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<i64>,
}
