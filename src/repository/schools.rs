//! Schools repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{
    flatten::{group_schools, SchoolTeacherRow},
    CrudRepository,
};
use crate::{
    error::{AppError, AppResult},
    models::School,
};

const SELECT_WITH_TEACHERS: &str = r#"
    SELECT s.id, s.name, s.address,
           t.id AS teacher_id, t.first_name, t.last_name
    FROM school s
    LEFT JOIN teacher t ON s.id = t.school_id
"#;

#[derive(Clone)]
pub struct SchoolsRepository {
    pool: Pool<Postgres>,
}

impl SchoolsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<School> for SchoolsRepository {
    async fn insert(&self, school: &mut School) -> AppResult<()> {
        school.id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO school (name, address) VALUES ($1, $2) RETURNING id",
        )
        .bind(&school.name)
        .bind(&school.address)
        .fetch_optional(&self.pool)
        .await?;
        Ok(())
    }

    /// List all schools with their teachers
    async fn find_all(&self) -> AppResult<Vec<School>> {
        let query = format!("{} ORDER BY s.id, t.id", SELECT_WITH_TEACHERS);
        let rows = sqlx::query_as::<_, SchoolTeacherRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(group_schools(rows))
    }

    /// Get school by ID with its teachers
    async fn find_by_id(&self, id: i64) -> AppResult<Option<School>> {
        let query = format!("{} WHERE s.id = $1 ORDER BY t.id", SELECT_WITH_TEACHERS);
        let rows = sqlx::query_as::<_, SchoolTeacherRow>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(group_schools(rows).into_iter().next())
    }

    async fn update(&self, school: &School) -> AppResult<()> {
        let id = school
            .id
            .ok_or_else(|| AppError::Validation("School ID required.".to_string()))?;

        sqlx::query("UPDATE school SET name = $1, address = $2 WHERE id = $3")
            .bind(&school.name)
            .bind(&school.address)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM school WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
