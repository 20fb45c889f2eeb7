//! School entity

use super::Teacher;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct School {
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    /// Teachers employed by the school (one-to-many)
    pub teachers: Vec<Teacher>,
}

impl School {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            teachers: Vec::new(),
        }
    }

    /// A school carrying only its key, used as a foreign-key value on writes
    pub fn reference(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}
