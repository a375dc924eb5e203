use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_business_table::Business;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessSave::Table)
                    .if_not_exists()
                    .col(string_len(BusinessSave::BusinessId, 10))
                    .col(string_len(BusinessSave::UserId, 10))
                    .col(
                        timestamp(BusinessSave::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(BusinessSave::BusinessId)
                            .col(BusinessSave::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_save_business_id")
                            .from(BusinessSave::Table, BusinessSave::BusinessId)
                            .to(Business::Table, Business::BusinessId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessSave::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusinessSave {
    Table,
    BusinessId,
    UserId,
    CreatedAt,
}
