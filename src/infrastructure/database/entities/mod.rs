//! Database entities module

pub mod bookmark;
pub mod category;
pub mod destination;
pub mod itinerary;
pub mod itinerary_destination;
pub mod revoked_token;
pub mod user;

pub use bookmark::Entity as Bookmark;
pub use category::Entity as Category;
pub use destination::Entity as Destination;
pub use itinerary::Entity as Itinerary;
pub use itinerary_destination::Entity as ItineraryDestination;
pub use revoked_token::Entity as RevokedToken;
pub use user::Entity as User;
