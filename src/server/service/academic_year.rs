use sea_orm::DatabaseConnection;

use crate::server::{
    data::academic_year::AcademicYearRepository,
    error::{is_unique_violation, AppError},
    model::academic_year::{AcademicYear, CreateAcademicYearParams, UpdateAcademicYearParams},
    service::identifier::IdentifierService,
};

pub struct AcademicYearService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicYearService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an academic year with a fresh id and color.
    ///
    /// # Returns
    /// - `Ok(AcademicYear)` - Created academic year
    /// - `Err(AppError::Conflict)` - Another academic year already has this name
    pub async fn create(&self, params: CreateAcademicYearParams) -> Result<AcademicYear, AppError> {
        let repo = AcademicYearRepository::new(self.db);

        if repo.name_exists(&params.name, None).await? {
            return Err(duplicate_name(&params.name));
        }

        let identifiers = IdentifierService::new(self.db);
        let year_id = identifiers.academic_year_id().await?;
        let year_color = identifiers.academic_year_color().await?;

        let name = params.name.clone();
        let year = repo
            .create(year_id, year_color, params)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    duplicate_name(&name)
                } else {
                    e.into()
                }
            })?;

        tracing::info!("Created academic year {} ({})", year.year_id, year.name);

        Ok(year)
    }

    /// Gets all academic years, newest first.
    pub async fn get_all(&self) -> Result<Vec<AcademicYear>, AppError> {
        Ok(AcademicYearRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, year_id: &str) -> Result<AcademicYear, AppError> {
        AcademicYearRepository::new(self.db)
            .find_by_id(year_id)
            .await?
            .ok_or_else(year_not_found)
    }

    /// Renames an academic year.
    ///
    /// # Returns
    /// - `Ok(())` - Renamed
    /// - `Err(AppError::NotFound)` - Unknown year id
    /// - `Err(AppError::Conflict)` - Another academic year already has this name
    pub async fn update(&self, params: UpdateAcademicYearParams) -> Result<(), AppError> {
        let repo = AcademicYearRepository::new(self.db);

        if repo
            .name_exists(&params.name, Some(&params.year_id))
            .await?
        {
            return Err(duplicate_name(&params.name));
        }

        let affected = repo
            .rename(&params.year_id, params.name.clone())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    duplicate_name(&params.name)
                } else {
                    e.into()
                }
            })?;

        if affected == 0 {
            return Err(year_not_found());
        }

        Ok(())
    }

    /// Deletes an academic year. Sessions that reference it keep their copied values.
    pub async fn delete(&self, year_id: &str) -> Result<(), AppError> {
        if AcademicYearRepository::new(self.db).delete(year_id).await? == 0 {
            return Err(year_not_found());
        }

        tracing::info!("Deleted academic year {}", year_id);

        Ok(())
    }
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("Academic year \"{}\" already exists", name))
}

fn year_not_found() -> AppError {
    AppError::NotFound("Academic year not found".to_string())
}
