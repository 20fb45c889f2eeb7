//! Repository layer for database operations
//!
//! Each store acquires a pooled connection per statement; none of them opens
//! an explicit transaction.

pub mod flatten;
pub mod pupils;
pub mod schools;
pub mod teachers;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Pupil, Teacher},
};

/// Insert/read/update/delete contract shared by every entity store
#[async_trait]
pub trait CrudRepository<T: Send + Sync + 'static>: Send + Sync {
    /// Insert `record` and set its id from the generated key.
    /// The id is left `None` when the database reports no key.
    async fn insert(&self, record: &mut T) -> AppResult<()>;

    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// `Ok(None)` when no row matches
    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>>;

    /// Overwrite every scalar column of the row keyed by `record.id`.
    /// Affecting zero rows is not an error.
    async fn update(&self, record: &T) -> AppResult<()>;

    /// Affecting zero rows is not an error
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Pupil store with the pupil-teacher join table operations
#[async_trait]
pub trait PupilRepository: CrudRepository<Pupil> {
    /// Fails with a unique violation when the pair is already linked
    async fn add_pupil_to_teacher(&self, pupil_id: i64, teacher_id: i64) -> AppResult<()>;

    async fn remove_pupil_from_teacher(&self, pupil_id: i64, teacher_id: i64) -> AppResult<()>;

    async fn find_pupils_by_teacher_id(&self, teacher_id: i64) -> AppResult<Vec<Pupil>>;

    async fn find_teachers_by_pupil_id(&self, pupil_id: i64) -> AppResult<Vec<Teacher>>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub schools: schools::SchoolsRepository,
    pub teachers: teachers::TeachersRepository,
    pub pupils: pupils::PupilsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            schools: schools::SchoolsRepository::new(pool.clone()),
            teachers: teachers::TeachersRepository::new(pool.clone()),
            pupils: pupils::PupilsRepository::new(pool.clone()),
            pool,
        }
    }
}
