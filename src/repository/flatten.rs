//! Folding joined result rows into nested entities
//!
//! School reads are a `school LEFT JOIN teacher`, one row per (school, teacher)
//! pair and a single row with null teacher columns for a school without
//! teachers. Rows are grouped by school id in first-seen order, so the result
//! does not depend on the database returning a school's rows contiguously.

use indexmap::IndexMap;
use sqlx::FromRow;

use crate::models::{School, Teacher};

/// One row of `school LEFT JOIN teacher`
#[derive(Debug, Clone, FromRow)]
pub struct SchoolTeacherRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub teacher_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// One row of `teacher JOIN school`
#[derive(Debug, Clone, FromRow)]
pub struct TeacherSchoolRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub school_id: i64,
    pub school_name: String,
    pub school_address: String,
}

/// Group joined rows into schools, each carrying its teachers
pub fn group_schools<I>(rows: I) -> Vec<School>
where
    I: IntoIterator<Item = SchoolTeacherRow>,
{
    let mut schools: IndexMap<i64, School> = IndexMap::new();

    for row in rows {
        let SchoolTeacherRow {
            id,
            name,
            address,
            teacher_id,
            first_name,
            last_name,
        } = row;

        let school = schools.entry(id).or_insert_with(|| School {
            id: Some(id),
            name,
            address,
            teachers: Vec::new(),
        });

        // Null teacher columns: the school has no teachers
        if let Some(teacher_id) = teacher_id {
            school.teachers.push(Teacher {
                id: Some(teacher_id),
                first_name: first_name.unwrap_or_default(),
                last_name: last_name.unwrap_or_default(),
                school: Some(School::reference(id)),
                pupils: Vec::new(),
            });
        }
    }

    schools.into_values().collect()
}

impl From<TeacherSchoolRow> for Teacher {
    fn from(row: TeacherSchoolRow) -> Self {
        Self {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            school: Some(School {
                id: Some(row.school_id),
                name: row.school_name,
                address: row.school_address,
                teachers: Vec::new(),
            }),
            pupils: Vec::new(),
        }
    }
}
