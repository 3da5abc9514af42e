//! Application services

mod category;
mod destination;
mod itinerary;

pub use category::CategoryService;
pub use destination::DestinationService;
pub use itinerary::{ItineraryService, TOP_LIMIT};
