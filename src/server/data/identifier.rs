use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct IdentifierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IdentifierRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether any row of entity `E` already holds `value` in `column`.
    pub async fn is_taken<E: EntityTrait>(
        &self,
        column: E::Column,
        value: &str,
    ) -> Result<bool, DbErr> {
        let existing = E::find()
            .select_only()
            .column(column)
            .filter(column.eq(value))
            .into_tuple::<String>()
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }
}
