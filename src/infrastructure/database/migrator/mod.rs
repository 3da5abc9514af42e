//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_categories;
mod m20240101_000003_create_destinations;
mod m20240101_000004_create_itineraires;
mod m20240101_000005_create_itineraire_destination;
mod m20240101_000006_create_avisiter;
mod m20240101_000007_create_revoked_tokens;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_categories::Migration),
            Box::new(m20240101_000003_create_destinations::Migration),
            Box::new(m20240101_000004_create_itineraires::Migration),
            Box::new(m20240101_000005_create_itineraire_destination::Migration),
            Box::new(m20240101_000006_create_avisiter::Migration),
            Box::new(m20240101_000007_create_revoked_tokens::Migration),
        ]
    }
}
