//! Business listing domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::business::{BusinessDetailsDto, BusinessDto, CreateBusinessDto, UpdateBusinessDto},
    server::{
        error::AppError,
        util::validate::{non_blank, required},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub business_id: String,
    pub user_id: String,
    pub title: String,
    pub details: BusinessDetails,
    pub verified: bool,
    pub active: bool,
    pub liked: i32,
    pub saved: i32,
    pub created_at: DateTime<Utc>,
}

/// Optional descriptive fields of a listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessDetails {
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub hours: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub gps: Option<String>,
    pub banner_url: Option<String>,
    pub logo: Option<String>,
    pub primary_contact: Option<String>,
    pub secondary_contact: Option<String>,
    pub business_email: Option<String>,
}

impl BusinessDetails {
    pub fn from_dto(dto: BusinessDetailsDto) -> Self {
        Self {
            subtitle: non_blank(dto.subtitle),
            category: non_blank(dto.category),
            description: non_blank(dto.description),
            hours: non_blank(dto.hours),
            address: non_blank(dto.address),
            country: non_blank(dto.country),
            region: non_blank(dto.region),
            gps: non_blank(dto.gps),
            banner_url: non_blank(dto.banner_url),
            logo: non_blank(dto.logo),
            primary_contact: non_blank(dto.primary_contact),
            secondary_contact: non_blank(dto.secondary_contact),
            business_email: non_blank(dto.business_email),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Business {
    pub fn from_entity(entity: entity::business::Model) -> Self {
        Self {
            business_id: entity.business_id,
            user_id: entity.user_id,
            title: entity.title,
            details: BusinessDetails {
                subtitle: entity.subtitle,
                category: entity.category,
                description: entity.description,
                hours: entity.hours,
                address: entity.address,
                country: entity.country,
                region: entity.region,
                gps: entity.gps,
                banner_url: entity.banner_url,
                logo: entity.logo,
                primary_contact: entity.primary_contact,
                secondary_contact: entity.secondary_contact,
                business_email: entity.business_email,
            },
            verified: entity.verified,
            active: entity.active,
            liked: entity.liked,
            saved: entity.saved,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BusinessDto {
        let d = self.details;

        BusinessDto {
            business_id: self.business_id,
            user_id: self.user_id,
            title: self.title,
            subtitle: d.subtitle,
            category: d.category,
            description: d.description,
            hours: d.hours,
            address: d.address,
            country: d.country,
            region: d.region,
            gps: d.gps,
            banner_url: d.banner_url,
            logo: d.logo,
            primary_contact: d.primary_contact,
            secondary_contact: d.secondary_contact,
            business_email: d.business_email,
            verified: self.verified,
            active: self.active,
            liked: self.liked,
            saved: self.saved,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBusinessParams {
    pub user_id: String,
    pub title: String,
    pub details: BusinessDetails,
}

impl CreateBusinessParams {
    pub fn from_dto(dto: CreateBusinessDto) -> Result<Self, AppError> {
        const MESSAGE: &str = "UserId and title are required";

        Ok(Self {
            user_id: required(dto.user_id, MESSAGE)?,
            title: required(dto.title, MESSAGE)?,
            details: BusinessDetails::from_dto(dto.details),
        })
    }
}

/// Partial listing update. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateBusinessParams {
    pub business_id: String,
    pub title: Option<String>,
    pub details: BusinessDetails,
}

impl UpdateBusinessParams {
    pub fn from_dto(business_id: String, dto: UpdateBusinessDto) -> Self {
        Self {
            business_id,
            title: non_blank(dto.title),
            details: BusinessDetails::from_dto(dto.details),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.details.is_empty()
    }
}

/// Which per-user interaction list or counter an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Like,
    Save,
}

impl InteractionKind {
    pub fn noun(self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Save => "Save",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Save => "saved",
        }
    }
}
