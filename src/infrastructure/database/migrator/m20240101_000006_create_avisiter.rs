//! Create avisiter (bookmarks) table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;
use super::m20240101_000004_create_itineraires::Itineraires;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Avisiter::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Avisiter::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Avisiter::UserId).integer().not_null())
                    .col(ColumnDef::new(Avisiter::ItineraireId).integer().not_null())
                    .col(
                        ColumnDef::new(Avisiter::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_avisiter_user")
                            .from(Avisiter::Table, Avisiter::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_avisiter_itineraire")
                            .from(Avisiter::Table, Avisiter::ItineraireId)
                            .to(Itineraires::Table, Itineraires::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One bookmark per user and itinerary
        manager
            .create_index(
                Index::create()
                    .name("idx_avisiter_user_itineraire")
                    .table(Avisiter::Table)
                    .col(Avisiter::UserId)
                    .col(Avisiter::ItineraireId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Avisiter::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Avisiter {
    Table,
    Id,
    UserId,
    ItineraireId,
    CreatedAt,
}
