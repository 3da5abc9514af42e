//! Create itineraire_destination association table

use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_destinations::Destinations;
use super::m20240101_000004_create_itineraires::Itineraires;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItineraireDestination::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItineraireDestination::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ItineraireDestination::ItineraireId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItineraireDestination::DestinationId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_itineraire_destination_itineraire")
                            .from(
                                ItineraireDestination::Table,
                                ItineraireDestination::ItineraireId,
                            )
                            .to(Itineraires::Table, Itineraires::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_itineraire_destination_destination")
                            .from(
                                ItineraireDestination::Table,
                                ItineraireDestination::DestinationId,
                            )
                            .to(Destinations::Table, Destinations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_itineraire_destination_itineraire")
                    .table(ItineraireDestination::Table)
                    .col(ItineraireDestination::ItineraireId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItineraireDestination::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ItineraireDestination {
    Table,
    Id,
    ItineraireId,
    DestinationId,
}
