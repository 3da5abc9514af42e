//! Application layer: use-case orchestration over the domain repositories

pub mod identity;
pub mod services;

pub use identity::{AuthResult, IdentityService};
pub use services::{CategoryService, DestinationService, ItineraryService};
