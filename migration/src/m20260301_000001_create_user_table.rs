use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Username, 150))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string_len(User::FirstName, 150).default(""))
                    .col(string_len(User::LastName, 150).default(""))
                    .col(string_len(User::DisplayName, 120).default(""))
                    .col(text(User::Bio).default(""))
                    .col(string_len(User::PhoneNo, 20).default(""))
                    .col(string(User::ProfilePic).default(""))
                    .col(date_null(User::Dob))
                    .col(timestamp_with_time_zone(User::DateJoined))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    DisplayName,
    Bio,
    PhoneNo,
    ProfilePic,
    Dob,
    DateJoined,
}
