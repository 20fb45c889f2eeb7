//! Conversions between persistence entities and transfer objects
//!
//! All conversions are total. A teacher's school travels as a flat
//! `school_id`; going back, that id becomes a key-only [`School::reference`]
//! which the teacher store only ever binds as a foreign key.

use crate::{
    dto::{PupilDto, SchoolDto, TeacherDto},
    models::{Pupil, School, Teacher},
};

impl From<School> for SchoolDto {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: Some(school.name),
            address: Some(school.address),
            teachers: school.teachers.into_iter().map(TeacherDto::from).collect(),
        }
    }
}

impl From<SchoolDto> for School {
    fn from(dto: SchoolDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            address: dto.address.unwrap_or_default(),
            teachers: dto.teachers.into_iter().map(Teacher::from).collect(),
        }
    }
}

impl From<Teacher> for TeacherDto {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            school_id: teacher.school_id(),
            first_name: Some(teacher.first_name),
            last_name: Some(teacher.last_name),
        }
    }
}

impl From<TeacherDto> for Teacher {
    fn from(dto: TeacherDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            school: dto.school_id.map(School::reference),
            pupils: Vec::new(),
        }
    }
}

impl From<Pupil> for PupilDto {
    fn from(pupil: Pupil) -> Self {
        Self {
            id: pupil.id,
            first_name: Some(pupil.first_name),
            last_name: Some(pupil.last_name),
        }
    }
}

impl From<PupilDto> for Pupil {
    fn from(dto: PupilDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            teachers: Vec::new(),
        }
    }
}
