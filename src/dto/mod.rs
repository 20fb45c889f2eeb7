//! Transfer objects exchanged over the HTTP API
//!
//! Fields are optional so that absent and empty values can both be reported
//! with the resource-specific validation message instead of a decode error.

pub mod pupil;
pub mod school;
pub mod teacher;

pub use pupil::{PupilDto, PupilTeacherLink};
pub use school::SchoolDto;
pub use teacher::TeacherDto;

use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};

/// Validate a request body, reporting the first failing message verbatim
pub fn validate_body<T: Validate>(body: &T) -> AppResult<()> {
    body.validate().map_err(|errors| AppError::Validation(first_message(&errors)))
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
