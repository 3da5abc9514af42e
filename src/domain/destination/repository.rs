use async_trait::async_trait;

use super::{Destination, NewDestination};
use crate::domain::DomainResult;

#[async_trait]
pub trait DestinationRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Destination>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Destination>>;
    async fn create(&self, destination: NewDestination) -> DomainResult<Destination>;
    /// Subset of `ids` that has no stored destination
    async fn missing_ids(&self, ids: &[i32]) -> DomainResult<Vec<i32>>;
}
