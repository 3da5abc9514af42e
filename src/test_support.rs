//! Shared fixtures for tests: an in-memory database with the schema applied
//! and a few seeding helpers.

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::domain::{
    Category, CategoryRepository, DestinationRef, Itinerary, ItineraryDraft, ItineraryRepository,
    NewDestination, NewUser, User, UserRepository, UserRole,
};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::repositories::category_repository::SeaOrmCategoryRepository;
use crate::infrastructure::database::repositories::itinerary_repository::SeaOrmItineraryRepository;
use crate::infrastructure::database::repositories::user_repository::SeaOrmUserRepository;

pub const TEST_PASSWORD: &str = "password123";

/// Lowest cost bcrypt accepts; keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

/// Fresh in-memory SQLite database with all migrations applied
pub async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

pub async fn seed_user(db: &DatabaseConnection, email: &str) -> User {
    let name = email.split('@').next().unwrap_or(email).to_string();
    SeaOrmUserRepository::new(db.clone())
        .create(NewUser {
            name,
            email: email.to_string(),
            password_hash: bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST).expect("hash"),
            role: UserRole::User,
        })
        .await
        .expect("seed user")
}

pub async fn seed_category(db: &DatabaseConnection, titre: &str) -> Category {
    SeaOrmCategoryRepository::new(db.clone())
        .create(titre)
        .await
        .expect("seed category")
}

/// Itinerary with one inline destination per entry of `destinations`
pub async fn seed_itinerary(
    db: &DatabaseConnection,
    user_id: i32,
    category_id: i32,
    titre: &str,
    destinations: &[&str],
) -> Itinerary {
    let destinations = destinations
        .iter()
        .map(|nom| {
            DestinationRef::New(NewDestination {
                logement: format!("{} Riad", nom),
                nom: nom.to_string(),
                activites: "walk".to_string(),
                plats: "tajine".to_string(),
            })
        })
        .collect();

    SeaOrmItineraryRepository::new(db.clone())
        .create(
            user_id,
            ItineraryDraft {
                titre: titre.to_string(),
                duree: "2 days".to_string(),
                image: "image.png".to_string(),
                category_id,
                destinations,
            },
        )
        .await
        .expect("seed itinerary")
}
