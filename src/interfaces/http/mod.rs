//! HTTP REST API interfaces
//!
//! - `error`: domain error → JSON response mapping
//! - `common`: shared extractors and response bodies
//! - `middleware`: bearer token authentication
//! - `modules`: request handlers per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod error;
pub mod middleware;
pub mod modules;
pub mod router;

pub use error::{ApiError, ApiResult};
pub use router::{create_api_router, AppState};
