//! Create `contacts` table with FK to `users`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(pk_auto(Contacts::Id))
                    .col(string_len(Contacts::Username, 100).not_null())
                    .col(string_len(Contacts::FirstName, 100).not_null())
                    .col(ColumnDef::new(Contacts::LastName).string_len(100).null())
                    .col(ColumnDef::new(Contacts::Email).string_len(200).null())
                    .col(ColumnDef::new(Contacts::Phone).string_len(20).null())
                    .col(timestamp_with_time_zone(Contacts::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Contacts::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contacts_users")
                            .from(Contacts::Table, Contacts::Username)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contacts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, Id, Username, FirstName, LastName, Email, Phone, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Users { Table, Username }
