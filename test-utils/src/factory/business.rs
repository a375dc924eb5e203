//! Business factory.

use crate::factory::helpers::{next_code, next_id};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test businesses.
///
/// Defaults:
/// - business_id: `B` followed by a zero-padded counter (10 characters)
/// - user_id: `"OWNER00000"` (no user row is required)
/// - title: `"Business {id}"`, active, unverified, zero counters
pub struct BusinessFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: String,
    user_id: String,
    title: String,
    category: Option<String>,
    active: bool,
    age_seconds: i64,
}

impl<'a> BusinessFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            business_id: next_code('B', 10),
            user_id: "OWNER00000".to_string(),
            title: format!("Business {}", next_id()),
            category: None,
            active: true,
            age_seconds: 0,
        }
    }

    pub fn business_id(mut self, business_id: impl Into<String>) -> Self {
        self.business_id = business_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn created_seconds_ago(mut self, seconds: i64) -> Self {
        self.age_seconds = seconds;
        self
    }

    /// Builds and inserts the business.
    pub async fn build(self) -> Result<entity::business::Model, DbErr> {
        entity::business::ActiveModel {
            business_id: ActiveValue::Set(self.business_id),
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(None),
            hours: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            region: ActiveValue::Set(None),
            gps: ActiveValue::Set(None),
            banner_url: ActiveValue::Set(None),
            logo: ActiveValue::Set(None),
            primary_contact: ActiveValue::Set(None),
            secondary_contact: ActiveValue::Set(None),
            business_email: ActiveValue::Set(None),
            verified: ActiveValue::Set(false),
            active: ActiveValue::Set(self.active),
            liked: ActiveValue::Set(0),
            saved: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now() - Duration::seconds(self.age_seconds)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a business with default values.
pub async fn create_business(db: &DatabaseConnection) -> Result<entity::business::Model, DbErr> {
    BusinessFactory::new(db).build().await
}
