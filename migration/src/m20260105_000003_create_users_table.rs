use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len_uniq(Users::UserId, 10))
                    .col(string(Users::Name))
                    .col(string_uniq(Users::Email))
                    .col(string_null(Users::Phone).unique_key())
                    .col(string(Users::Password))
                    .col(boolean(Users::Member).default(false))
                    .col(string_null(Users::Country))
                    .col(string_null(Users::Area))
                    .col(string_null(Users::District))
                    .col(string_null(Users::LocalAssembly))
                    .col(string_null(Users::ProfileUrl))
                    .col(boolean(Users::IsActive).default(true))
                    .col(boolean(Users::EmailVerified).default(false))
                    .col(boolean(Users::PhoneVerified).default(false))
                    .col(string_len_null(Users::Otp, 8))
                    .col(timestamp_null(Users::OtpExpires))
                    .col(string_len_null(Users::PasswordResetToken, 64))
                    .col(timestamp_null(Users::PasswordResetExpires))
                    .col(timestamp_null(Users::LastLogin))
                    .col(
                        timestamp(Users::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Phone,
    Password,
    Member,
    Country,
    Area,
    District,
    LocalAssembly,
    ProfileUrl,
    IsActive,
    EmailVerified,
    PhoneVerified,
    Otp,
    OtpExpires,
    PasswordResetToken,
    PasswordResetExpires,
    LastLogin,
    CreatedAt,
}
