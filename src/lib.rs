//! # Itinerary API
//!
//! REST backend for sharing travel itineraries: users register and sign in
//! with JWT bearer tokens, publish itineraries made of reusable destinations,
//! keep a "to visit" list and browse popularity reports.
//!
//! ## Architecture
//!
//! - **domain**: entities, validation inputs, row grouping and repository traits
//! - **application**: identity, category, destination and itinerary services
//! - **infrastructure**: SeaORM entities, migrations and repositories; JWT and bcrypt
//! - **interfaces**: axum HTTP layer with Swagger documentation
//! - **server**: process lifecycle (metrics, database, graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

#[cfg(test)]
pub mod test_support;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, run_migrations, DatabaseConfig};

pub use interfaces::http::{create_api_router, AppState};
