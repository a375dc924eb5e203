use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Business::Table)
                    .if_not_exists()
                    .col(string_len(Business::BusinessId, 10).primary_key())
                    .col(string_len(Business::UserId, 10))
                    .col(string(Business::Title))
                    .col(string_null(Business::Subtitle))
                    .col(string_null(Business::Category))
                    .col(text_null(Business::Description))
                    .col(string_null(Business::Hours))
                    .col(string_null(Business::Address))
                    .col(string_null(Business::Country))
                    .col(string_null(Business::Region))
                    .col(string_null(Business::Gps))
                    .col(string_null(Business::BannerUrl))
                    .col(string_null(Business::Logo))
                    .col(string_null(Business::PrimaryContact))
                    .col(string_null(Business::SecondaryContact))
                    .col(string_null(Business::BusinessEmail))
                    .col(boolean(Business::Verified).default(false))
                    .col(boolean(Business::Active).default(true))
                    .col(integer(Business::Liked).default(0))
                    .col(integer(Business::Saved).default(0))
                    .col(
                        timestamp(Business::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_business_user_id")
                    .table(Business::Table)
                    .col(Business::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Business::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Business {
    Table,
    BusinessId,
    UserId,
    Title,
    Subtitle,
    Category,
    Description,
    Hours,
    Address,
    Country,
    Region,
    Gps,
    BannerUrl,
    Logo,
    PrimaryContact,
    SecondaryContact,
    BusinessEmail,
    Verified,
    Active,
    Liked,
    Saved,
    CreatedAt,
}
