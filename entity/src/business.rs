use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "business")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub business_id: String,
    pub user_id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub hours: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub gps: Option<String>,
    pub banner_url: Option<String>,
    pub logo: Option<String>,
    pub primary_contact: Option<String>,
    pub secondary_contact: Option<String>,
    pub business_email: Option<String>,
    pub verified: bool,
    pub active: bool,
    pub liked: i32,
    pub saved: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::business_like::Entity")]
    BusinessLike,
    #[sea_orm(has_many = "super::business_save::Entity")]
    BusinessSave,
}

impl Related<super::business_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessLike.def()
    }
}

impl Related<super::business_save::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessSave.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
