//! Teacher service

use std::sync::Arc;

use crate::{
    dto::TeacherDto,
    error::AppResult,
    models::Teacher,
    repository::CrudRepository,
};

#[derive(Clone)]
pub struct TeacherService {
    repository: Arc<dyn CrudRepository<Teacher>>,
}

impl TeacherService {
    pub fn new(repository: Arc<dyn CrudRepository<Teacher>>) -> Self {
        Self { repository }
    }

    /// Insert a teacher, returning it with its assigned id
    pub async fn save(&self, dto: TeacherDto) -> AppResult<TeacherDto> {
        let mut teacher = Teacher::from(dto);
        self.repository.insert(&mut teacher).await?;
        tracing::debug!(id = ?teacher.id, school_id = ?teacher.school_id(), "Teacher created");
        Ok(teacher.into())
    }

    pub async fn get_all(&self) -> AppResult<Vec<TeacherDto>> {
        let teachers = self.repository.find_all().await?;
        Ok(teachers.into_iter().map(TeacherDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<TeacherDto>> {
        Ok(self.repository.find_by_id(id).await?.map(TeacherDto::from))
    }

    pub async fn update(&self, dto: TeacherDto) -> AppResult<TeacherDto> {
        let teacher = Teacher::from(dto);
        self.repository.update(&teacher).await?;
        Ok(teacher.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::School, repository::mock::MockTeacherRepo};

    #[tokio::test]
    async fn test_save_binds_school_reference() {
        let mut repo = MockTeacherRepo::new();
        repo.expect_insert().times(1).returning(|teacher| {
            assert_eq!(teacher.school_id(), Some(1));
            teacher.id = Some(9);
            Ok(())
        });

        let service = TeacherService::new(Arc::new(repo));
        let saved = service
            .save(TeacherDto {
                id: None,
                first_name: Some("Ada".into()),
                last_name: Some("Lovelace".into()),
                school_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(saved.id, Some(9));
        assert_eq!(saved.school_id, Some(1));
    }

    #[tokio::test]
    async fn test_get_by_id_flattens_school() {
        let mut repo = MockTeacherRepo::new();
        repo.expect_find_by_id().returning(|id| {
            let mut school = School::new("Lincoln High", "1 Main St");
            school.id = Some(3);
            let mut teacher = Teacher::new("Ada", "Lovelace", Some(school));
            teacher.id = Some(id);
            Ok(Some(teacher))
        });

        let service = TeacherService::new(Arc::new(repo));
        let dto = service.get_by_id(4).await.unwrap().expect("teacher");
        assert_eq!(dto.id, Some(4));
        assert_eq!(dto.school_id, Some(3));
    }

    #[tokio::test]
    async fn test_update_passes_full_record() {
        let mut repo = MockTeacherRepo::new();
        repo.expect_update()
            .withf(|teacher| {
                teacher.id == Some(2)
                    && teacher.first_name == "Grace"
                    && teacher.school_id() == Some(5)
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = TeacherService::new(Arc::new(repo));
        service
            .update(TeacherDto {
                id: Some(2),
                first_name: Some("Grace".into()),
                last_name: Some("Hopper".into()),
                school_id: Some(5),
            })
            .await
            .unwrap();
    }
}
