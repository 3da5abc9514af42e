//! Category DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Category;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "The titre field is required."))]
    pub titre: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub titre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            titre: c.titre,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub categorie: CategoryDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryMutationResponse {
    pub message: String,
    pub categorie: CategoryDto,
}
