//! Likes and saves.
//!
//! Each change writes the pair row and adjusts the matching counter on the business in one
//! transaction, so the counter always equals the number of pair rows.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{business::BusinessRepository, interaction::InteractionRepository},
    error::{is_unique_violation, AppError},
    model::business::{Business, InteractionKind},
    service::business::business_not_found,
};

pub struct InteractionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InteractionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that `user_id` liked or saved `business_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Pair stored and counter incremented
    /// - `Err(AppError::BadRequest)` - Missing ids
    /// - `Err(AppError::NotFound)` - Unknown business
    /// - `Err(AppError::Conflict)` - Pair already exists
    pub async fn add(
        &self,
        kind: InteractionKind,
        business_id: Option<String>,
        user_id: Option<String>,
    ) -> Result<(), AppError> {
        let (business_id, user_id) = require_pair(business_id, user_id)?;

        let txn = self.db.begin().await?;

        if BusinessRepository::new(&txn)
            .find_by_id(&business_id)
            .await?
            .is_none()
        {
            return Err(business_not_found());
        }

        if let Err(e) = InteractionRepository::new(&txn)
            .insert(kind, &business_id, &user_id)
            .await
        {
            if is_unique_violation(&e) {
                return Err(AppError::Conflict(format!(
                    "Business already {}",
                    kind.past_tense()
                )));
            }
            return Err(e.into());
        }

        BusinessRepository::new(&txn)
            .increment_counter(&business_id, kind)
            .await?;
        txn.commit().await?;

        Ok(())
    }

    /// Removes a like or save.
    ///
    /// # Returns
    /// - `Ok(())` - Pair removed and counter decremented (never below zero)
    /// - `Err(AppError::BadRequest)` - Missing ids
    /// - `Err(AppError::NotFound)` - The pair does not exist
    pub async fn remove(
        &self,
        kind: InteractionKind,
        business_id: Option<String>,
        user_id: Option<String>,
    ) -> Result<(), AppError> {
        let (business_id, user_id) = require_pair(business_id, user_id)?;

        let txn = self.db.begin().await?;

        if InteractionRepository::new(&txn)
            .remove(kind, &business_id, &user_id)
            .await?
            == 0
        {
            return Err(AppError::NotFound(format!("{} not found", kind.noun())));
        }

        BusinessRepository::new(&txn)
            .decrement_counter(&business_id, kind)
            .await?;
        txn.commit().await?;

        Ok(())
    }

    /// Gets the businesses a user liked or saved, most recent first.
    pub async fn businesses_for_user(
        &self,
        kind: InteractionKind,
        user_id: &str,
    ) -> Result<Vec<Business>, AppError> {
        Ok(InteractionRepository::new(self.db)
            .businesses_for_user(kind, user_id)
            .await?)
    }

    /// Reports whether the user has liked and saved the business, as `(liked, saved)`.
    pub async fn status(&self, business_id: &str, user_id: &str) -> Result<(bool, bool), AppError> {
        let repo = InteractionRepository::new(self.db);

        let liked = repo
            .exists(InteractionKind::Like, business_id, user_id)
            .await?;
        let saved = repo
            .exists(InteractionKind::Save, business_id, user_id)
            .await?;

        Ok((liked, saved))
    }
}

fn require_pair(
    business_id: Option<String>,
    user_id: Option<String>,
) -> Result<(String, String), AppError> {
    match (
        business_id.filter(|b| !b.trim().is_empty()),
        user_id.filter(|u| !u.trim().is_empty()),
    ) {
        (Some(business_id), Some(user_id)) => Ok((business_id, user_id)),
        _ => Err(AppError::BadRequest(
            "businessId and userId are required".to_string(),
        )),
    }
}
