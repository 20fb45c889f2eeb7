//! Pupil entity

use super::Teacher;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pupil {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub teachers: Vec<Teacher>,
}

impl Pupil {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            teachers: Vec::new(),
        }
    }
}
