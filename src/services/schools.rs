//! School service

use std::sync::Arc;

use crate::{
    dto::SchoolDto,
    error::AppResult,
    models::School,
    repository::CrudRepository,
};

#[derive(Clone)]
pub struct SchoolService {
    repository: Arc<dyn CrudRepository<School>>,
}

impl SchoolService {
    pub fn new(repository: Arc<dyn CrudRepository<School>>) -> Self {
        Self { repository }
    }

    /// Insert a school, returning it with its assigned id
    pub async fn save(&self, dto: SchoolDto) -> AppResult<SchoolDto> {
        let mut school = School::from(dto);
        self.repository.insert(&mut school).await?;
        tracing::debug!(id = ?school.id, "School created");
        Ok(school.into())
    }

    pub async fn get_all(&self) -> AppResult<Vec<SchoolDto>> {
        let schools = self.repository.find_all().await?;
        Ok(schools.into_iter().map(SchoolDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<SchoolDto>> {
        Ok(self.repository.find_by_id(id).await?.map(SchoolDto::from))
    }

    pub async fn update(&self, dto: SchoolDto) -> AppResult<SchoolDto> {
        let school = School::from(dto);
        self.repository.update(&school).await?;
        Ok(school.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Teacher, repository::mock::MockSchoolRepo};

    #[tokio::test]
    async fn test_save_assigns_id() {
        let mut repo = MockSchoolRepo::new();
        repo.expect_insert().times(1).returning(|school| {
            assert_eq!(school.name, "Lincoln High");
            school.id = Some(1);
            Ok(())
        });

        let service = SchoolService::new(Arc::new(repo));
        let saved = service
            .save(SchoolDto {
                name: Some("Lincoln High".into()),
                address: Some("1 Main St".into()),
                ..SchoolDto::default()
            })
            .await
            .unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.address.as_deref(), Some("1 Main St"));
    }

    #[tokio::test]
    async fn test_save_without_generated_key() {
        let mut repo = MockSchoolRepo::new();
        repo.expect_insert().times(1).returning(|_| Ok(()));

        let service = SchoolService::new(Arc::new(repo));
        let saved = service.save(SchoolDto::default()).await.unwrap();
        assert_eq!(saved.id, None);
    }

    #[tokio::test]
    async fn test_get_all_preserves_order_and_teachers() {
        let mut repo = MockSchoolRepo::new();
        repo.expect_find_all().times(1).returning(|| {
            let mut first = School::new("Lincoln High", "1 Main St");
            first.id = Some(2);
            let mut ada = Teacher::new("Ada", "Lovelace", Some(School::reference(2)));
            ada.id = Some(5);
            first.teachers.push(ada);

            let mut second = School::new("Roosevelt", "2 Oak Ave");
            second.id = Some(1);
            Ok(vec![first, second])
        });

        let service = SchoolService::new(Arc::new(repo));
        let schools = service.get_all().await.unwrap();

        assert_eq!(schools.len(), 2);
        assert_eq!(schools[0].id, Some(2));
        assert_eq!(schools[0].teachers[0].school_id, Some(2));
        assert_eq!(schools[1].name.as_deref(), Some("Roosevelt"));
        assert!(schools[1].teachers.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_school() {
        let mut repo = MockSchoolRepo::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 42)
            .returning(|_| Ok(None));

        let service = SchoolService::new(Arc::new(repo));
        assert_eq!(service.get_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_storage_error_is_surfaced() {
        let mut repo = MockSchoolRepo::new();
        repo.expect_delete()
            .returning(|_| Err(sqlx::Error::PoolTimedOut.into()));

        let service = SchoolService::new(Arc::new(repo));
        assert!(service.delete(1).await.is_err());
    }
}
