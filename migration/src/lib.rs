pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_academic_year_table;
mod m20260105_000002_create_session_table;
mod m20260105_000003_create_users_table;
mod m20260105_000004_create_business_table;
mod m20260105_000005_create_business_like_table;
mod m20260105_000006_create_business_save_table;
mod m20260105_000007_create_school_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_academic_year_table::Migration),
            Box::new(m20260105_000002_create_session_table::Migration),
            Box::new(m20260105_000003_create_users_table::Migration),
            Box::new(m20260105_000004_create_business_table::Migration),
            Box::new(m20260105_000005_create_business_like_table::Migration),
            Box::new(m20260105_000006_create_business_save_table::Migration),
            Box::new(m20260105_000007_create_school_table::Migration),
        ]
    }
}
