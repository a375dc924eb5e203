use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::business::{Business, InteractionKind};

/// Access to the `business_like` and `business_save` pair tables.
pub struct InteractionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InteractionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `(business, user)` pair. A duplicate pair fails with a primary key violation.
    pub async fn insert(
        &self,
        kind: InteractionKind,
        business_id: &str,
        user_id: &str,
    ) -> Result<(), DbErr> {
        match kind {
            InteractionKind::Like => {
                entity::business_like::ActiveModel {
                    business_id: ActiveValue::Set(business_id.to_string()),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    created_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?;
            }
            InteractionKind::Save => {
                entity::business_save::ActiveModel {
                    business_id: ActiveValue::Set(business_id.to_string()),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    created_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Removes a pair. Returns the number of rows deleted.
    pub async fn remove(
        &self,
        kind: InteractionKind,
        business_id: &str,
        user_id: &str,
    ) -> Result<u64, DbErr> {
        let key = (business_id.to_string(), user_id.to_string());

        let result = match kind {
            InteractionKind::Like => {
                entity::prelude::BusinessLike::delete_by_id(key)
                    .exec(self.db)
                    .await?
            }
            InteractionKind::Save => {
                entity::prelude::BusinessSave::delete_by_id(key)
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    pub async fn exists(
        &self,
        kind: InteractionKind,
        business_id: &str,
        user_id: &str,
    ) -> Result<bool, DbErr> {
        let key = (business_id.to_string(), user_id.to_string());

        let found = match kind {
            InteractionKind::Like => entity::prelude::BusinessLike::find_by_id(key)
                .one(self.db)
                .await?
                .is_some(),
            InteractionKind::Save => entity::prelude::BusinessSave::find_by_id(key)
                .one(self.db)
                .await?
                .is_some(),
        };

        Ok(found)
    }

    /// Gets the businesses a user liked or saved, most recent interaction first.
    pub async fn businesses_for_user(
        &self,
        kind: InteractionKind,
        user_id: &str,
    ) -> Result<Vec<Business>, DbErr> {
        let businesses = match kind {
            InteractionKind::Like => entity::prelude::BusinessLike::find()
                .filter(entity::business_like::Column::UserId.eq(user_id))
                .order_by_desc(entity::business_like::Column::CreatedAt)
                .find_also_related(entity::prelude::Business)
                .all(self.db)
                .await?
                .into_iter()
                .filter_map(|(_, business)| business)
                .collect::<Vec<_>>(),
            InteractionKind::Save => entity::prelude::BusinessSave::find()
                .filter(entity::business_save::Column::UserId.eq(user_id))
                .order_by_desc(entity::business_save::Column::CreatedAt)
                .find_also_related(entity::prelude::Business)
                .all(self.db)
                .await?
                .into_iter()
                .filter_map(|(_, business)| business)
                .collect::<Vec<_>>(),
        };

        Ok(businesses.into_iter().map(Business::from_entity).collect())
    }
}
