//! Create `addresses` table with FK to `contacts`.
//!
//! Rows go away together with their contact (ON DELETE CASCADE).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(pk_auto(Addresses::Id))
                    .col(integer(Addresses::ContactId).not_null())
                    .col(ColumnDef::new(Addresses::Street).string_len(255).null())
                    .col(ColumnDef::new(Addresses::City).string_len(100).null())
                    .col(ColumnDef::new(Addresses::Province).string_len(100).null())
                    .col(string_len(Addresses::Country, 100).not_null())
                    .col(string_len(Addresses::PostalCode, 10).not_null())
                    .col(timestamp_with_time_zone(Addresses::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Addresses::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_contacts")
                            .from(Addresses::Table, Addresses::ContactId)
                            .to(Contacts::Table, Contacts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Addresses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    ContactId,
    Street,
    City,
    Province,
    Country,
    PostalCode,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Contacts { Table, Id }
