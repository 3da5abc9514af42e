//! Itinerary aggregate
//!
//! Contains the Itinerary entity, the write payloads, the flat-row grouping
//! used by every read endpoint, and the repository interfaces.

pub mod grouping;
pub mod model;
pub mod repository;

pub use grouping::{group_rows, DestinationSummary, ItineraryRow, ItinerarySummary};
pub use model::{
    DestinationInput, DestinationRef, Itinerary, ItineraryDraft, ItineraryFilter, ItineraryInput,
    PopularItinerary, MIN_DESTINATIONS,
};
pub use repository::{BookmarkRepository, ItineraryRepository};
