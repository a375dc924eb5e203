use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(string_len(Session::SessionId, 8).primary_key())
                    .col(string(Session::Title))
                    .col(string_null(Session::AcademicYear))
                    .col(string_len_null(Session::YearId, 8))
                    .col(boolean(Session::Active).default(false))
                    .col(string_null(Session::YearColors))
                    .col(string_len_uniq(Session::SessionColor, 7))
                    .col(string_null(Session::CreatedBy))
                    .col(
                        timestamp(Session::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_active")
                    .table(Session::Table)
                    .col(Session::Active)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Session {
    Table,
    SessionId,
    Title,
    AcademicYear,
    YearId,
    Active,
    YearColors,
    SessionColor,
    CreatedBy,
    CreatedAt,
}
