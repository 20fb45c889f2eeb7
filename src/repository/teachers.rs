//! Teachers repository
//!
//! Reads always join the owning school; the foreign key is mandatory, so a
//! teacher is never returned without it.

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres};

use super::{flatten::TeacherSchoolRow, CrudRepository};
use crate::{
    error::{AppError, AppResult},
    models::{School, Teacher},
};

const SELECT_WITH_SCHOOL: &str = r#"
    SELECT t.id, t.first_name, t.last_name, t.school_id,
           s.name AS school_name, s.address AS school_address
    FROM teacher t
    JOIN school s ON t.school_id = s.id
"#;

/// Bare teacher row; the school is known only by its key
#[derive(Debug, FromRow)]
pub(crate) struct TeacherRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub school_id: i64,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Teacher {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            school: Some(School::reference(row.school_id)),
            pupils: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct TeachersRepository {
    pool: Pool<Postgres>,
}

impl TeachersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Teacher> for TeachersRepository {
    async fn insert(&self, teacher: &mut Teacher) -> AppResult<()> {
        // A missing school binds NULL and is rejected by the NOT NULL constraint
        teacher.id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO teacher (first_name, last_name, school_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&teacher.first_name)
        .bind(&teacher.last_name)
        .bind(teacher.school_id())
        .fetch_optional(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Teacher>> {
        let query = format!("{} ORDER BY t.id", SELECT_WITH_SCHOOL);
        let rows = sqlx::query_as::<_, TeacherSchoolRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Teacher>> {
        let query = format!("{} WHERE t.id = $1", SELECT_WITH_SCHOOL);
        let row = sqlx::query_as::<_, TeacherSchoolRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Teacher::from))
    }

    async fn update(&self, teacher: &Teacher) -> AppResult<()> {
        let id = teacher
            .id
            .ok_or_else(|| AppError::Validation("Teacher ID required.".to_string()))?;

        sqlx::query("UPDATE teacher SET first_name = $1, last_name = $2, school_id = $3 WHERE id = $4")
            .bind(&teacher.first_name)
            .bind(&teacher.last_name)
            .bind(teacher.school_id())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM teacher WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
