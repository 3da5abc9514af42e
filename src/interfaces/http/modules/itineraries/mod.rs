//! Itineraries: grouped reads, owner-only writes, to-visit list and reports

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
