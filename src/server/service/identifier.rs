//! Collision-checked random identifiers and colors.
//!
//! Candidates are drawn synchronously, then checked against the target column. A taken
//! candidate is discarded and redrawn, up to `max_attempts` times.

use sea_orm::{ConnectionTrait, EntityTrait, IdenStatic};

use crate::server::{
    data::identifier::IdentifierRepository,
    error::{internal::InternalError, AppError},
    util::random::{random_color, random_id, LONG_ID_LEN, SHORT_ID_LEN},
};

pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

pub struct IdentifierService<'a, C: ConnectionTrait> {
    db: &'a C,
    max_attempts: usize,
}

impl<'a, C: ConnectionTrait> IdentifierService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[cfg(test)]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub async fn academic_year_id(&self) -> Result<String, AppError> {
        self.generate_with::<entity::prelude::AcademicYear, _>(
            entity::academic_year::Column::YearId,
            || random_id(SHORT_ID_LEN),
        )
        .await
    }

    pub async fn academic_year_color(&self) -> Result<String, AppError> {
        self.generate_with::<entity::prelude::AcademicYear, _>(
            entity::academic_year::Column::YearColor,
            random_color,
        )
        .await
    }

    pub async fn session_id(&self) -> Result<String, AppError> {
        self.generate_with::<entity::prelude::Session, _>(
            entity::session::Column::SessionId,
            || random_id(SHORT_ID_LEN),
        )
        .await
    }

    pub async fn session_color(&self) -> Result<String, AppError> {
        self.generate_with::<entity::prelude::Session, _>(
            entity::session::Column::SessionColor,
            random_color,
        )
        .await
    }

    pub async fn user_id(&self) -> Result<String, AppError> {
        self.generate_with::<entity::prelude::User, _>(entity::user::Column::UserId, || {
            random_id(LONG_ID_LEN)
        })
        .await
    }

    pub async fn business_id(&self) -> Result<String, AppError> {
        self.generate_with::<entity::prelude::Business, _>(
            entity::business::Column::BusinessId,
            || random_id(LONG_ID_LEN),
        )
        .await
    }

    /// Draws candidates from `draw` until one is not present in `column`.
    ///
    /// # Returns
    /// - `Ok(String)` - A value no row of `E` holds in `column`
    /// - `Err(AppError::InternalErr(IdentifierExhausted))` - Every attempt collided
    /// - `Err(AppError::DbErr)` - The uniqueness query failed
    pub async fn generate_with<E, F>(&self, column: E::Column, mut draw: F) -> Result<String, AppError>
    where
        E: EntityTrait,
        F: FnMut() -> String,
    {
        let repo = IdentifierRepository::new(self.db);

        for attempt in 1..=self.max_attempts {
            let candidate = draw();

            if !repo.is_taken::<E>(column, &candidate).await? {
                return Ok(candidate);
            }

            tracing::warn!(
                "Generated value {} for {} already exists (attempt {}/{})",
                candidate,
                column.as_str(),
                attempt,
                self.max_attempts
            );
        }

        Err(InternalError::IdentifierExhausted {
            column: column.as_str(),
            attempts: self.max_attempts,
        }
        .into())
    }
}
