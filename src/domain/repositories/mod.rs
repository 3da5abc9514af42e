//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::category::CategoryRepository;
use super::destination::DestinationRepository;
use super::itinerary::{BookmarkRepository, ItineraryRepository};
use super::token::RevokedTokenRepository;
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let category = repos.categories().find_by_id(1).await?;
///     let rows = repos.itineraries().find_rows(ItineraryFilter::Category(1)).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn categories(&self) -> &dyn CategoryRepository;
    fn destinations(&self) -> &dyn DestinationRepository;
    fn itineraries(&self) -> &dyn ItineraryRepository;
    fn bookmarks(&self) -> &dyn BookmarkRepository;
    fn revoked_tokens(&self) -> &dyn RevokedTokenRepository;
}
