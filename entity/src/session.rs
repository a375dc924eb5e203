use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: String,
    pub title: String,
    /// Display name of the academic year, copied by value.
    pub academic_year: Option<String>,
    pub year_id: Option<String>,
    pub active: bool,
    pub year_colors: Option<String>,
    #[sea_orm(unique)]
    pub session_color: String,
    pub created_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
