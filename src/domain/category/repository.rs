use async_trait::async_trait;

use super::{Category, CategoryCount};
use crate::domain::DomainResult;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Category>>;
    async fn create(&self, titre: &str) -> DomainResult<Category>;
    async fn update(&self, id: i32, titre: &str) -> DomainResult<Option<Category>>;
    /// Returns `false` when nothing was deleted. Fails with
    /// `DomainError::Conflict` while itineraries still reference the category.
    async fn delete(&self, id: i32) -> DomainResult<bool>;
    /// Categories with at least one itinerary, ordered by id
    async fn count_itineraries(&self) -> DomainResult<Vec<CategoryCount>>;
}
