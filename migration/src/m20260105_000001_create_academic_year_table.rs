use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicYear::Table)
                    .if_not_exists()
                    .col(string_len(AcademicYear::YearId, 8).primary_key())
                    .col(string_uniq(AcademicYear::Name))
                    .col(date_null(AcademicYear::StartDate))
                    .col(date_null(AcademicYear::EndDate))
                    .col(string_len_uniq(AcademicYear::YearColor, 7))
                    .col(string_null(AcademicYear::CreatedBy))
                    .col(
                        timestamp(AcademicYear::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademicYear::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcademicYear {
    Table,
    YearId,
    Name,
    StartDate,
    EndDate,
    YearColor,
    CreatedBy,
    CreatedAt,
}
