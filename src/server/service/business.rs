use sea_orm::DatabaseConnection;

use crate::server::{
    data::business::BusinessRepository,
    error::AppError,
    model::business::{Business, CreateBusinessParams, UpdateBusinessParams},
    service::identifier::IdentifierService,
};

pub struct BusinessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active, unverified listing.
    pub async fn create(&self, params: CreateBusinessParams) -> Result<Business, AppError> {
        let business_id = IdentifierService::new(self.db).business_id().await?;

        let business = BusinessRepository::new(self.db)
            .create(business_id, params)
            .await?;

        tracing::info!(
            "Created business {} for user {}",
            business.business_id,
            business.user_id
        );

        Ok(business)
    }

    /// Gets active listings, newest first.
    pub async fn get_active(&self) -> Result<Vec<Business>, AppError> {
        Ok(BusinessRepository::new(self.db).get_active().await?)
    }

    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Vec<Business>, AppError> {
        Ok(BusinessRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?)
    }

    pub async fn get_by_id(&self, business_id: &str) -> Result<Business, AppError> {
        BusinessRepository::new(self.db)
            .find_by_id(business_id)
            .await?
            .ok_or_else(business_not_found)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(())` - Updated
    /// - `Err(AppError::BadRequest)` - No fields provided
    /// - `Err(AppError::NotFound)` - Unknown business
    pub async fn update(&self, params: UpdateBusinessParams) -> Result<(), AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest(
                "No valid fields provided for update".to_string(),
            ));
        }

        if BusinessRepository::new(self.db).update(params).await? == 0 {
            return Err(business_not_found());
        }

        Ok(())
    }

    pub async fn set_verified(
        &self,
        business_id: &str,
        status: Option<bool>,
    ) -> Result<bool, AppError> {
        let status = require_status(status)?;

        if BusinessRepository::new(self.db)
            .set_verified(business_id, status)
            .await?
            == 0
        {
            return Err(business_not_found());
        }

        Ok(status)
    }

    pub async fn set_active(
        &self,
        business_id: &str,
        status: Option<bool>,
    ) -> Result<bool, AppError> {
        let status = require_status(status)?;

        if BusinessRepository::new(self.db)
            .set_active(business_id, status)
            .await?
            == 0
        {
            return Err(business_not_found());
        }

        Ok(status)
    }

    pub async fn delete(&self, business_id: &str) -> Result<(), AppError> {
        if BusinessRepository::new(self.db).delete(business_id).await? == 0 {
            return Err(business_not_found());
        }

        tracing::info!("Deleted business {}", business_id);

        Ok(())
    }
}

fn require_status(status: Option<bool>) -> Result<bool, AppError> {
    status.ok_or_else(|| AppError::BadRequest("Status must be boolean".to_string()))
}

pub(crate) fn business_not_found() -> AppError {
    AppError::NotFound("Business not found".to_string())
}
