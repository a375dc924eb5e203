use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::business::{
    Business, BusinessDetails, CreateBusinessParams, InteractionKind, UpdateBusinessParams,
};

/// Business table access.
///
/// Generic over the connection so interaction counters can be adjusted inside the same
/// transaction as the like/save row.
pub struct BusinessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active, unverified business with zeroed counters.
    pub async fn create(
        &self,
        business_id: String,
        params: CreateBusinessParams,
    ) -> Result<Business, DbErr> {
        let d = params.details;

        let entity = entity::business::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            subtitle: ActiveValue::Set(d.subtitle),
            category: ActiveValue::Set(d.category),
            description: ActiveValue::Set(d.description),
            hours: ActiveValue::Set(d.hours),
            address: ActiveValue::Set(d.address),
            country: ActiveValue::Set(d.country),
            region: ActiveValue::Set(d.region),
            gps: ActiveValue::Set(d.gps),
            banner_url: ActiveValue::Set(d.banner_url),
            logo: ActiveValue::Set(d.logo),
            primary_contact: ActiveValue::Set(d.primary_contact),
            secondary_contact: ActiveValue::Set(d.secondary_contact),
            business_email: ActiveValue::Set(d.business_email),
            verified: ActiveValue::Set(false),
            active: ActiveValue::Set(true),
            liked: ActiveValue::Set(0),
            saved: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Business::from_entity(entity))
    }

    /// Gets active businesses, newest first.
    pub async fn get_active(&self) -> Result<Vec<Business>, DbErr> {
        let entities = entity::prelude::Business::find()
            .filter(entity::business::Column::Active.eq(true))
            .order_by_desc(entity::business::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Business::from_entity).collect())
    }

    /// Gets every business owned by a user, active or not, newest first.
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Vec<Business>, DbErr> {
        let entities = entity::prelude::Business::find()
            .filter(entity::business::Column::UserId.eq(user_id))
            .order_by_desc(entity::business::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Business::from_entity).collect())
    }

    pub async fn find_by_id(&self, business_id: &str) -> Result<Option<Business>, DbErr> {
        let entity = entity::prelude::Business::find_by_id(business_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Business::from_entity))
    }

    /// Applies a partial update. Callers must reject empty patches first.
    pub async fn update(&self, params: UpdateBusinessParams) -> Result<u64, DbErr> {
        let BusinessDetails {
            subtitle,
            category,
            description,
            hours,
            address,
            country,
            region,
            gps,
            banner_url,
            logo,
            primary_contact,
            secondary_contact,
            business_email,
        } = params.details;

        let mut model = <entity::business::ActiveModel as std::default::Default>::default();
        if let Some(title) = params.title {
            model.title = ActiveValue::Set(title);
        }

        let optional_fields = [
            (&mut model.subtitle, subtitle),
            (&mut model.category, category),
            (&mut model.description, description),
            (&mut model.hours, hours),
            (&mut model.address, address),
            (&mut model.country, country),
            (&mut model.region, region),
            (&mut model.gps, gps),
            (&mut model.banner_url, banner_url),
            (&mut model.logo, logo),
            (&mut model.primary_contact, primary_contact),
            (&mut model.secondary_contact, secondary_contact),
            (&mut model.business_email, business_email),
        ];
        for (column, value) in optional_fields {
            if let Some(value) = value {
                *column = ActiveValue::Set(Some(value));
            }
        }

        let result = entity::prelude::Business::update_many()
            .set(model)
            .filter(entity::business::Column::BusinessId.eq(params.business_id.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_verified(&self, business_id: &str, verified: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Business::update_many()
            .col_expr(entity::business::Column::Verified, Expr::value(verified))
            .filter(entity::business::Column::BusinessId.eq(business_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_active(&self, business_id: &str, active: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Business::update_many()
            .col_expr(entity::business::Column::Active, Expr::value(active))
            .filter(entity::business::Column::BusinessId.eq(business_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a business. Its like and save rows go with it through the foreign key.
    pub async fn delete(&self, business_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Business::delete_by_id(business_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Adds one to the like or save counter.
    pub async fn increment_counter(
        &self,
        business_id: &str,
        kind: InteractionKind,
    ) -> Result<u64, DbErr> {
        let column = counter_column(kind);

        let result = entity::prelude::Business::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(entity::business::Column::BusinessId.eq(business_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Subtracts one from the like or save counter, never going below zero.
    pub async fn decrement_counter(
        &self,
        business_id: &str,
        kind: InteractionKind,
    ) -> Result<u64, DbErr> {
        let column = counter_column(kind);

        let result = entity::prelude::Business::update_many()
            .col_expr(column, Expr::col(column).sub(1))
            .filter(entity::business::Column::BusinessId.eq(business_id))
            .filter(column.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn counter_column(kind: InteractionKind) -> entity::business::Column {
    match kind {
        InteractionKind::Like => entity::business::Column::Liked,
        InteractionKind::Save => entity::business::Column::Saved,
    }
}
