//! Category aggregate

pub mod model;
pub mod repository;

pub use model::{Category, CategoryCount};
pub use repository::CategoryRepository;
