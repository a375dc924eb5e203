use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(School::Table)
                    .if_not_exists()
                    .col(pk_auto(School::Id))
                    .col(string(School::Name))
                    .col(string_null(School::Address))
                    .col(string_null(School::Contact1))
                    .col(string_null(School::Contact2))
                    .col(string_null(School::Email))
                    .col(string_null(School::LogoFile))
                    .col(string_null(School::LogoUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(School::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum School {
    Table,
    Id,
    Name,
    Address,
    Contact1,
    Contact2,
    Email,
    LogoFile,
    LogoUrl,
}
