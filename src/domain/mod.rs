pub mod category;
pub mod destination;
pub mod itinerary;
pub mod repositories;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use category::{Category, CategoryCount, CategoryRepository};
pub use destination::{Destination, DestinationRepository, NewDestination};
pub use itinerary::{
    group_rows, BookmarkRepository, DestinationInput, DestinationRef, DestinationSummary,
    Itinerary, ItineraryDraft, ItineraryFilter, ItineraryInput, ItineraryRepository, ItineraryRow,
    ItinerarySummary, PopularItinerary,
};
pub use repositories::{DomainResult, RepositoryProvider};
pub use token::RevokedTokenRepository;
pub use user::{Caller, NewUser, User, UserRepository, UserRole};

pub use crate::shared::errors::DomainError;
