//! Academic year factory.

use crate::factory::helpers::{next_code, next_color, next_id};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test academic years.
///
/// Defaults:
/// - year_id: `Y` followed by a zero-padded counter (8 characters)
/// - name: `"Year {id}"`
/// - year_color: unique `#RRGGBB`
/// - no start or end date
pub struct AcademicYearFactory<'a> {
    db: &'a DatabaseConnection,
    year_id: String,
    name: String,
    year_color: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl<'a> AcademicYearFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            year_id: next_code('Y', 8),
            name: format!("Year {}", next_id()),
            year_color: next_color(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn year_id(mut self, year_id: impl Into<String>) -> Self {
        self.year_id = year_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn year_color(mut self, year_color: impl Into<String>) -> Self {
        self.year_color = year_color.into();
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Builds and inserts the academic year.
    pub async fn build(self) -> Result<entity::academic_year::Model, DbErr> {
        entity::academic_year::ActiveModel {
            year_id: ActiveValue::Set(self.year_id),
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            year_color: ActiveValue::Set(self.year_color),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an academic year with default values.
pub async fn create_academic_year(
    db: &DatabaseConnection,
) -> Result<entity::academic_year::Model, DbErr> {
    AcademicYearFactory::new(db).build().await
}
