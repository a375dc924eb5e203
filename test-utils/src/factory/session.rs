//! Session factory.

use crate::factory::helpers::{next_code, next_color, next_id};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions.
///
/// Inserts rows directly, so `active(true)` does not deactivate other sessions. Tests that
/// need the single-active invariant should go through the session service instead.
///
/// Defaults:
/// - session_id: `S` followed by a zero-padded counter (8 characters)
/// - title: `"Session {id}"`
/// - inactive, not linked to an academic year
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: String,
    title: String,
    academic_year: Option<String>,
    year_id: Option<String>,
    active: bool,
    session_color: String,
    age_seconds: i64,
}

impl<'a> SessionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            session_id: next_code('S', 8),
            title: format!("Session {}", next_id()),
            academic_year: None,
            year_id: None,
            active: false,
            session_color: next_color(),
            age_seconds: 0,
        }
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Links the session to an academic year by copying its id and name.
    pub fn year(mut self, year: &entity::academic_year::Model) -> Self {
        self.academic_year = Some(year.name.clone());
        self.year_id = Some(year.year_id.clone());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn session_color(mut self, session_color: impl Into<String>) -> Self {
        self.session_color = session_color.into();
        self
    }

    /// Backdates `created_at` so list ordering can be asserted deterministically.
    pub fn created_seconds_ago(mut self, seconds: i64) -> Self {
        self.age_seconds = seconds;
        self
    }

    /// Builds and inserts the session.
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            session_id: ActiveValue::Set(self.session_id),
            title: ActiveValue::Set(self.title),
            academic_year: ActiveValue::Set(self.academic_year),
            year_id: ActiveValue::Set(self.year_id),
            active: ActiveValue::Set(self.active),
            year_colors: ActiveValue::Set(None),
            session_color: ActiveValue::Set(self.session_color),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now() - Duration::seconds(self.age_seconds)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inactive session with default values.
pub async fn create_session(db: &DatabaseConnection) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db).build().await
}

/// Creates an active session. Does not touch other rows.
pub async fn create_active_session(
    db: &DatabaseConnection,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db).active(true).build().await
}
