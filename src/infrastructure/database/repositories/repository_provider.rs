//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    BookmarkRepository, CategoryRepository, DestinationRepository, ItineraryRepository,
    RepositoryProvider, RevokedTokenRepository, UserRepository,
};

use super::bookmark_repository::SeaOrmBookmarkRepository;
use super::category_repository::SeaOrmCategoryRepository;
use super::destination_repository::SeaOrmDestinationRepository;
use super::itinerary_repository::SeaOrmItineraryRepository;
use super::revoked_token_repository::SeaOrmRevokedTokenRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let category = repos.categories().find_by_id(1).await?;
/// let top = repos.itineraries().most_bookmarked(10).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    categories: SeaOrmCategoryRepository,
    destinations: SeaOrmDestinationRepository,
    itineraries: SeaOrmItineraryRepository,
    bookmarks: SeaOrmBookmarkRepository,
    revoked_tokens: SeaOrmRevokedTokenRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            categories: SeaOrmCategoryRepository::new(db.clone()),
            destinations: SeaOrmDestinationRepository::new(db.clone()),
            itineraries: SeaOrmItineraryRepository::new(db.clone()),
            bookmarks: SeaOrmBookmarkRepository::new(db.clone()),
            revoked_tokens: SeaOrmRevokedTokenRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn destinations(&self) -> &dyn DestinationRepository {
        &self.destinations
    }

    fn itineraries(&self) -> &dyn ItineraryRepository {
        &self.itineraries
    }

    fn bookmarks(&self) -> &dyn BookmarkRepository {
        &self.bookmarks
    }

    fn revoked_tokens(&self) -> &dyn RevokedTokenRepository {
        &self.revoked_tokens
    }
}
