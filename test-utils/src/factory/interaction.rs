//! Like and save row factories.
//!
//! These insert the pair rows only; the business counters are left untouched.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a like row created `seconds_ago` seconds in the past.
pub async fn create_like(
    db: &DatabaseConnection,
    business_id: &str,
    user_id: &str,
    seconds_ago: i64,
) -> Result<entity::business_like::Model, DbErr> {
    entity::business_like::ActiveModel {
        business_id: ActiveValue::Set(business_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        created_at: ActiveValue::Set(Utc::now() - Duration::seconds(seconds_ago)),
    }
    .insert(db)
    .await
}

/// Inserts a save row created `seconds_ago` seconds in the past.
pub async fn create_save(
    db: &DatabaseConnection,
    business_id: &str,
    user_id: &str,
    seconds_ago: i64,
) -> Result<entity::business_save::Model, DbErr> {
    entity::business_save::ActiveModel {
        business_id: ActiveValue::Set(business_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        created_at: ActiveValue::Set(Utc::now() - Duration::seconds(seconds_ago)),
    }
    .insert(db)
    .await
}
