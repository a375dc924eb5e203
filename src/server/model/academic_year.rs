//! Academic year domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::academic_year::{AcademicYearDto, CreateAcademicYearDto, UpdateAcademicYearDto},
    server::{error::AppError, util::validate::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AcademicYear {
    pub year_id: String,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub year_color: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AcademicYear {
    pub fn from_entity(entity: entity::academic_year::Model) -> Self {
        Self {
            year_id: entity.year_id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            year_color: entity.year_color,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AcademicYearDto {
        AcademicYearDto {
            year_id: self.year_id,
            academic_year_name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            year_color: self.year_color,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating an academic year.
///
/// Start and end dates are stored as given; no ordering or overlap check is applied.
#[derive(Debug, Clone)]
pub struct CreateAcademicYearParams {
    /// Trimmed, non-empty display name. Unique across academic years.
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: Option<String>,
}

impl CreateAcademicYearParams {
    pub fn from_dto(dto: CreateAcademicYearDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required(dto.academic_year_name, "Academic year name is required")?,
            start_date: dto.start_date,
            end_date: dto.end_date,
            created_by: dto.created_by,
        })
    }
}

/// Parameters for renaming an academic year. The name is the only mutable field.
#[derive(Debug, Clone)]
pub struct UpdateAcademicYearParams {
    pub year_id: String,
    pub name: String,
}

impl UpdateAcademicYearParams {
    pub fn from_dto(dto: UpdateAcademicYearDto) -> Result<Self, AppError> {
        const MESSAGE: &str = "yearId and academicYearName are required";

        Ok(Self {
            year_id: required(dto.year_id, MESSAGE)?,
            name: required(dto.academic_year_name, MESSAGE)?,
        })
    }
}
