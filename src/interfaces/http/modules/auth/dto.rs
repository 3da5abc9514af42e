//! Authentication DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::User;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Format rules only. Blank fields pass here and are reported as required
/// by the identity service together with the duplicate-email check.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "The name may not be greater than 255 characters."))]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "email_format"),
        length(max = 255, message = "The email may not be greater than 255 characters.")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "password_length"))]
    pub password: String,
}

fn email_format(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message("The email must be a valid email address.".into()))
}

fn password_length(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() >= MIN_PASSWORD_LEN {
        return Ok(());
    }
    Err(ValidationError::new("length")
        .with_message(format!("The password must be at least {} characters.", MIN_PASSWORD_LEN).into()))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "The email field is required."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

/// Public user representation; never carries the password hash
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role.to_string(),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user: UserDto,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub user: UserDto,
}
