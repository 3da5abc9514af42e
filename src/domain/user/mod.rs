//! User aggregate
//!
//! Contains the User entity, the resolved `Caller` identity and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{Caller, NewUser, User, UserRole};
pub use repository::UserRepository;
