use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_year")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub year_id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    #[sea_orm(unique)]
    pub year_color: String,
    pub created_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
