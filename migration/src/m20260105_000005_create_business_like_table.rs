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
                    .table(BusinessLike::Table)
                    .if_not_exists()
                    .col(string_len(BusinessLike::BusinessId, 10))
                    .col(string_len(BusinessLike::UserId, 10))
                    .col(
                        timestamp(BusinessLike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(BusinessLike::BusinessId)
                            .col(BusinessLike::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_like_business_id")
                            .from(BusinessLike::Table, BusinessLike::BusinessId)
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
            .drop_table(Table::drop().table(BusinessLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusinessLike {
    Table,
    BusinessId,
    UserId,
    CreatedAt,
}
