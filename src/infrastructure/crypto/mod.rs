//! Token signing and password hashing

pub mod jwt;
pub mod password;

pub use jwt::{create_token, verify_token, IssuedToken, JwtConfig, TokenClaims};
pub use password::{hash_password, verify_password};
