//! Destination aggregate

pub mod model;
pub mod repository;

pub use model::{Destination, NewDestination};
pub use repository::DestinationRepository;
