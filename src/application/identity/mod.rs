//! Identity module: registration, login, bearer token verification and
//! logout.

pub mod service;

pub use service::{AuthResult, IdentityService};
