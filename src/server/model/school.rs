//! School profile domain model.

use crate::{
    model::school::{SchoolDto, UpsertSchoolDto},
    server::{error::AppError, util::validate::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct School {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub contact1: Option<String>,
    pub contact2: Option<String>,
    pub email: Option<String>,
    pub logo_file: Option<String>,
    pub logo_url: Option<String>,
}

impl School {
    pub fn from_entity(entity: entity::school::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            contact1: entity.contact1,
            contact2: entity.contact2,
            email: entity.email,
            logo_file: entity.logo_file,
            logo_url: entity.logo_url,
        }
    }

    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            id: self.id,
            name: self.name,
            address: self.address,
            contact1: self.contact1,
            contact2: self.contact2,
            email: self.email,
            logo_file: self.logo_file,
            logo_url: self.logo_url,
        }
    }
}

/// Replacement values for the school's contact fields. Logo columns are left untouched.
#[derive(Debug, Clone)]
pub struct UpsertSchoolParams {
    pub name: String,
    pub address: Option<String>,
    pub contact1: Option<String>,
    pub contact2: Option<String>,
    pub email: Option<String>,
}

impl UpsertSchoolParams {
    pub fn from_dto(dto: UpsertSchoolDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required(dto.name, "School name is required")?,
            address: dto.address,
            contact1: dto.contact1,
            contact2: dto.contact2,
            email: dto.email,
        })
    }
}
