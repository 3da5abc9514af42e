//! Create destinations table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Destinations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Destinations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Destinations::Logement).string().not_null())
                    .col(ColumnDef::new(Destinations::Nom).string().not_null())
                    .col(ColumnDef::new(Destinations::Activites).text().not_null())
                    .col(ColumnDef::new(Destinations::Plats).text().not_null())
                    .col(
                        ColumnDef::new(Destinations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Destinations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Destinations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Destinations {
    Table,
    Id,
    Logement,
    Nom,
    Activites,
    Plats,
    CreatedAt,
    UpdatedAt,
}
