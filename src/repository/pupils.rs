//! Pupils repository, including the pupil_teacher join table

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres};

use super::{teachers::TeacherRow, CrudRepository, PupilRepository};
use crate::{
    error::{AppError, AppResult},
    models::{Pupil, Teacher},
};

#[derive(Debug, FromRow)]
struct PupilRow {
    id: i64,
    first_name: String,
    last_name: String,
}

impl From<PupilRow> for Pupil {
    fn from(row: PupilRow) -> Self {
        Pupil {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            teachers: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct PupilsRepository {
    pool: Pool<Postgres>,
}

impl PupilsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Pupil> for PupilsRepository {
    async fn insert(&self, pupil: &mut Pupil) -> AppResult<()> {
        pupil.id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO pupil (first_name, last_name) VALUES ($1, $2) RETURNING id",
        )
        .bind(&pupil.first_name)
        .bind(&pupil.last_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Pupil>> {
        let rows = sqlx::query_as::<_, PupilRow>(
            "SELECT id, first_name, last_name FROM pupil ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Pupil::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Pupil>> {
        let row = sqlx::query_as::<_, PupilRow>(
            "SELECT id, first_name, last_name FROM pupil WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Pupil::from))
    }

    async fn update(&self, pupil: &Pupil) -> AppResult<()> {
        let id = pupil
            .id
            .ok_or_else(|| AppError::Validation("Pupil ID required.".to_string()))?;

        sqlx::query("UPDATE pupil SET first_name = $1, last_name = $2 WHERE id = $3")
            .bind(&pupil.first_name)
            .bind(&pupil.last_name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM pupil WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PupilRepository for PupilsRepository {
    async fn add_pupil_to_teacher(&self, pupil_id: i64, teacher_id: i64) -> AppResult<()> {
        sqlx::query("INSERT INTO pupil_teacher (pupil_id, teacher_id) VALUES ($1, $2)")
            .bind(pupil_id)
            .bind(teacher_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove_pupil_from_teacher(&self, pupil_id: i64, teacher_id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM pupil_teacher WHERE pupil_id = $1 AND teacher_id = $2")
            .bind(pupil_id)
            .bind(teacher_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_pupils_by_teacher_id(&self, teacher_id: i64) -> AppResult<Vec<Pupil>> {
        let rows = sqlx::query_as::<_, PupilRow>(
            r#"
            SELECT p.id, p.first_name, p.last_name
            FROM pupil p
            INNER JOIN pupil_teacher pt ON p.id = pt.pupil_id
            WHERE pt.teacher_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Pupil::from).collect())
    }

    async fn find_teachers_by_pupil_id(&self, pupil_id: i64) -> AppResult<Vec<Teacher>> {
        let rows = sqlx::query_as::<_, TeacherRow>(
            r#"
            SELECT t.id, t.first_name, t.last_name, t.school_id
            FROM teacher t
            INNER JOIN pupil_teacher pt ON t.id = pt.teacher_id
            WHERE pt.pupil_id = $1
            ORDER BY t.id
            "#,
        )
        .bind(pupil_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Teacher::from).collect())
    }
}
