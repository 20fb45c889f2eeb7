//! Business logic services
//!
//! Services map between transfer objects and entities around a single store
//! call; no rules live here beyond what the stores and mapper enforce.

pub mod pupils;
pub mod schools;
pub mod teachers;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub schools: schools::SchoolService,
    pub teachers: teachers::TeacherService,
    pub pupils: pupils::PupilService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            schools: schools::SchoolService::new(Arc::new(repository.schools)),
            teachers: teachers::TeacherService::new(Arc::new(repository.teachers)),
            pupils: pupils::PupilService::new(Arc::new(repository.pupils)),
        }
    }
}
