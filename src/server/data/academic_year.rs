use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::academic_year::{AcademicYear, CreateAcademicYearParams};

pub struct AcademicYearRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicYearRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an academic year with pre-generated id and color.
    pub async fn create(
        &self,
        year_id: String,
        year_color: String,
        params: CreateAcademicYearParams,
    ) -> Result<AcademicYear, DbErr> {
        let entity = entity::academic_year::ActiveModel {
            year_id: ActiveValue::Set(year_id),
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            year_color: ActiveValue::Set(year_color),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(AcademicYear::from_entity(entity))
    }

    /// Gets all academic years, newest first.
    pub async fn get_all(&self) -> Result<Vec<AcademicYear>, DbErr> {
        let entities = entity::prelude::AcademicYear::find()
            .order_by_desc(entity::academic_year::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AcademicYear::from_entity).collect())
    }

    pub async fn find_by_id(&self, year_id: &str) -> Result<Option<AcademicYear>, DbErr> {
        let entity = entity::prelude::AcademicYear::find_by_id(year_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(AcademicYear::from_entity))
    }

    /// Checks whether another academic year already uses `name`.
    ///
    /// # Arguments
    /// - `name` - Display name to look for
    /// - `exclude_year_id` - Academic year to ignore, used when renaming
    pub async fn name_exists(
        &self,
        name: &str,
        exclude_year_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::AcademicYear::find()
            .filter(entity::academic_year::Column::Name.eq(name));

        if let Some(year_id) = exclude_year_id {
            query = query.filter(entity::academic_year::Column::YearId.ne(year_id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Renames an academic year. Returns the number of rows affected.
    pub async fn rename(&self, year_id: &str, name: String) -> Result<u64, DbErr> {
        let result = entity::prelude::AcademicYear::update_many()
            .set(entity::academic_year::ActiveModel {
                name: ActiveValue::Set(name),
                ..Default::default()
            })
            .filter(entity::academic_year::Column::YearId.eq(year_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an academic year. Sessions referencing it are left as they are.
    pub async fn delete(&self, year_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::AcademicYear::delete_by_id(year_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
