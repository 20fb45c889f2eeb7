//! Pupil service, including pupil-teacher relation management

use std::sync::Arc;

use crate::{
    dto::{PupilDto, TeacherDto},
    error::AppResult,
    models::Pupil,
    repository::PupilRepository,
};

#[derive(Clone)]
pub struct PupilService {
    repository: Arc<dyn PupilRepository>,
}

impl PupilService {
    pub fn new(repository: Arc<dyn PupilRepository>) -> Self {
        Self { repository }
    }

    /// Insert a pupil, returning it with its assigned id
    pub async fn save(&self, dto: PupilDto) -> AppResult<PupilDto> {
        let mut pupil = Pupil::from(dto);
        self.repository.insert(&mut pupil).await?;
        tracing::debug!(id = ?pupil.id, "Pupil created");
        Ok(pupil.into())
    }

    pub async fn get_all(&self) -> AppResult<Vec<PupilDto>> {
        let pupils = self.repository.find_all().await?;
        Ok(pupils.into_iter().map(PupilDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<PupilDto>> {
        Ok(self.repository.find_by_id(id).await?.map(PupilDto::from))
    }

    pub async fn update(&self, dto: PupilDto) -> AppResult<PupilDto> {
        let pupil = Pupil::from(dto);
        self.repository.update(&pupil).await?;
        Ok(pupil.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }

    pub async fn add_pupil_to_teacher(&self, pupil_id: i64, teacher_id: i64) -> AppResult<()> {
        self.repository.add_pupil_to_teacher(pupil_id, teacher_id).await?;
        tracing::debug!(pupil_id, teacher_id, "Pupil assigned to teacher");
        Ok(())
    }

    pub async fn get_all_pupils_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<PupilDto>> {
        let pupils = self.repository.find_pupils_by_teacher_id(teacher_id).await?;
        Ok(pupils.into_iter().map(PupilDto::from).collect())
    }

    pub async fn remove_pupil_from_teacher(&self, pupil_id: i64, teacher_id: i64) -> AppResult<()> {
        self.repository.remove_pupil_from_teacher(pupil_id, teacher_id).await
    }

    pub async fn get_all_teachers_by_pupil(&self, pupil_id: i64) -> AppResult<Vec<TeacherDto>> {
        let teachers = self.repository.find_teachers_by_pupil_id(pupil_id).await?;
        Ok(teachers.into_iter().map(TeacherDto::from).collect())
    }
}
