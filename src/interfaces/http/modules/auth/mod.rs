//! Authentication module: register, login, profile, logout

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
