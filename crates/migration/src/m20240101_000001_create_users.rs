//! Create `users` table.
//!
//! Root entity; the username is the primary key and contacts reference it.
//! `token` holds the single active session, NULL when logged out.
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
                    .col(string_len(Users::Username, 100).primary_key())
                    .col(string_len(Users::Password, 255).not_null())
                    .col(string_len(Users::Name, 100).not_null())
                    // Explicitly nullable: logout clears it
                    .col(ColumnDef::new(Users::Token).string_len(100).null())
                    .col(timestamp_with_time_zone(Users::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Users::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Username, Password, Name, Token, CreatedAt, UpdatedAt }
