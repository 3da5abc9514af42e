//! Itinerary & bookmark repository interfaces

use async_trait::async_trait;

use super::grouping::ItineraryRow;
use super::model::{Itinerary, ItineraryDraft, ItineraryFilter, PopularItinerary};
use crate::domain::DomainResult;

#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Flat join rows matching `filter`, ordered by itinerary id then by
    /// association order. Itineraries without destinations produce no row.
    async fn find_rows(&self, filter: ItineraryFilter) -> DomainResult<Vec<ItineraryRow>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Itinerary>>;

    /// Ids of the destinations attached to `id`, in association order
    async fn destination_ids(&self, id: i32) -> DomainResult<Vec<i32>>;

    /// Insert the itinerary, create inline destinations and attach all of
    /// them atomically.
    async fn create(&self, user_id: i32, draft: ItineraryDraft) -> DomainResult<Itinerary>;

    /// Overwrite scalar fields, detach every destination and re-attach the
    /// draft's list, atomically. `None` when `id` does not exist.
    async fn replace(&self, id: i32, draft: ItineraryDraft) -> DomainResult<Option<Itinerary>>;

    /// Remove the itinerary with its destination links and bookmarks
    async fn delete(&self, id: i32) -> DomainResult<bool>;

    /// Most bookmarked itineraries, count descending then id ascending
    async fn most_bookmarked(&self, limit: u64) -> DomainResult<Vec<PopularItinerary>>;
}

/// "À visiter" markers between users and itineraries
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Returns `false` when the pair already existed
    async fn add(&self, user_id: i32, itinerary_id: i32) -> DomainResult<bool>;
    /// Returns `false` when there was nothing to remove
    async fn remove(&self, user_id: i32, itinerary_id: i32) -> DomainResult<bool>;
}
