//! Teacher entity

use super::{Pupil, School};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teacher {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// Owning school; reads always populate it through the school join
    pub school: Option<School>,
    pub pupils: Vec<Pupil>,
}

impl Teacher {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, school: Option<School>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            school,
            pupils: Vec::new(),
        }
    }

    pub fn school_id(&self) -> Option<i64> {
        self.school.as_ref().and_then(|school| school.id)
    }
}
