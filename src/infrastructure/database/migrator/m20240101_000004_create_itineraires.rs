//! Create itineraires table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;
use super::m20240101_000002_create_categories::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Itineraires::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Itineraires::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Itineraires::Titre).string().not_null())
                    .col(ColumnDef::new(Itineraires::Duree).string().not_null())
                    .col(ColumnDef::new(Itineraires::Image).string().not_null())
                    .col(ColumnDef::new(Itineraires::CategorieId).integer().not_null())
                    .col(ColumnDef::new(Itineraires::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Itineraires::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Itineraires::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_itineraires_categorie")
                            .from(Itineraires::Table, Itineraires::CategorieId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_itineraires_user")
                            .from(Itineraires::Table, Itineraires::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_itineraires_categorie")
                    .table(Itineraires::Table)
                    .col(Itineraires::CategorieId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Itineraires::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Itineraires {
    Table,
    Id,
    Titre,
    Duree,
    Image,
    CategorieId,
    UserId,
    CreatedAt,
    UpdatedAt,
}
