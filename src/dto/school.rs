//! School transfer object

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::TeacherDto;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(
        required(message = "Name and/or address required."),
        length(min = 1, message = "Name and/or address required.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Name and/or address required."),
        length(min = 1, message = "Name and/or address required.")
    )]
    pub address: Option<String>,
    /// Teachers of the school, one level deep
    pub teachers: Vec<TeacherDto>,
}
