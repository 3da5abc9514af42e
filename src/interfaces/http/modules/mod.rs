pub mod auth;
pub mod categories;
pub mod destinations;
pub mod health;
pub mod itineraries;
pub mod metrics;
pub mod request_id;
