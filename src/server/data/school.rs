use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::school::{School, UpsertSchoolParams};

pub struct SchoolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the school profile, the first row by id.
    pub async fn get(&self) -> Result<Option<School>, DbErr> {
        let entity = entity::prelude::School::find()
            .order_by_asc(entity::school::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(School::from_entity))
    }

    /// Updates the existing school row, or inserts one when none exists.
    pub async fn upsert(&self, params: UpsertSchoolParams) -> Result<School, DbErr> {
        let existing = entity::prelude::School::find()
            .order_by_asc(entity::school::Column::Id)
            .one(self.db)
            .await?;

        let model = match existing {
            Some(existing) => {
                let mut active: entity::school::ActiveModel = existing.into();
                active.name = ActiveValue::Set(params.name);
                active.address = ActiveValue::Set(params.address);
                active.contact1 = ActiveValue::Set(params.contact1);
                active.contact2 = ActiveValue::Set(params.contact2);
                active.email = ActiveValue::Set(params.email);
                active.update(self.db).await?
            }
            None => {
                entity::school::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    address: ActiveValue::Set(params.address),
                    contact1: ActiveValue::Set(params.contact1),
                    contact2: ActiveValue::Set(params.contact2),
                    email: ActiveValue::Set(params.email),
                    logo_file: ActiveValue::Set(None),
                    logo_url: ActiveValue::Set(None),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(School::from_entity(model))
    }
}
