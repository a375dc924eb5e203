use sea_orm::DatabaseConnection;

use crate::server::{
    data::school::SchoolRepository,
    error::AppError,
    model::school::{School, UpsertSchoolParams},
};

pub struct SchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the school profile. `None` until it has been saved once.
    pub async fn get(&self) -> Result<Option<School>, AppError> {
        Ok(SchoolRepository::new(self.db).get().await?)
    }

    /// Creates or replaces the school profile.
    pub async fn upsert(&self, params: UpsertSchoolParams) -> Result<School, AppError> {
        let school = SchoolRepository::new(self.db).upsert(params).await?;

        tracing::info!("Saved school profile {}", school.name);

        Ok(school)
    }
}
