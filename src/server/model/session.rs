//! Session domain models and parameters.
//!
//! A session is a term inside an academic year. At most one session is active at any
//! time; see `SessionService` for how that is enforced.

use chrono::{DateTime, Utc};

use crate::{
    model::session::{CreateSessionDto, SessionDto, UpdateSessionDto},
    server::{
        error::AppError,
        util::validate::required,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub session_id: String,
    pub title: String,
    /// Academic year display name, copied by value at write time.
    pub academic_year: Option<String>,
    pub year_id: Option<String>,
    pub active: bool,
    pub year_colors: Option<String>,
    pub session_color: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self {
            session_id: entity.session_id,
            title: entity.title,
            academic_year: entity.academic_year,
            year_id: entity.year_id,
            active: entity.active,
            year_colors: entity.year_colors,
            session_color: entity.session_color,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    /// Converts to the API representation.
    ///
    /// This is the only path from a session to JSON, so every endpoint reports `active`
    /// as a boolean.
    pub fn into_dto(self) -> SessionDto {
        SessionDto {
            session_id: self.session_id,
            session_title: self.title,
            academic_year: self.academic_year,
            year_id: self.year_id,
            active: self.active,
            year_colors: self.year_colors,
            session_color: self.session_color,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSessionParams {
    pub title: String,
    pub academic_year: Option<String>,
    pub year_id: Option<String>,
    /// When true every other session is deactivated in the same transaction.
    pub active: bool,
    pub year_colors: Option<String>,
    pub created_by: Option<String>,
}

impl CreateSessionParams {
    pub fn from_dto(dto: CreateSessionDto) -> Result<Self, AppError> {
        Ok(Self {
            title: required(dto.session_title, "Session title is required")?,
            academic_year: dto.academic_year,
            year_id: dto.year_id,
            active: dto.active,
            year_colors: dto.year_colors,
            created_by: dto.created_by,
        })
    }
}

/// Partial session update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateSessionParams {
    pub session_id: String,
    pub title: Option<String>,
    pub academic_year: Option<String>,
    pub year_id: Option<String>,
    pub active: Option<bool>,
}

impl UpdateSessionParams {
    pub fn from_dto(dto: UpdateSessionDto) -> Result<Self, AppError> {
        Ok(Self {
            session_id: required(dto.session_id, "sessionId is required")?,
            title: dto
                .session_title
                .map(|title| required(Some(title), "Session title cannot be empty"))
                .transpose()?,
            academic_year: dto.academic_year,
            year_id: dto.year_id,
            active: dto.active,
        })
    }

    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.academic_year.is_none()
            && self.year_id.is_none()
            && self.active.is_none()
    }
}
