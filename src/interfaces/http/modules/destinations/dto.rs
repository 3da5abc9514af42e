//! Destination DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Destination, NewDestination};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDestinationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "The logement field is required."))]
    pub logement: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The nom field is required."))]
    pub nom: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The activites field is required."))]
    pub activites: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The plats field is required."))]
    pub plats: String,
}

impl From<CreateDestinationRequest> for NewDestination {
    fn from(r: CreateDestinationRequest) -> Self {
        Self {
            logement: r.logement,
            nom: r.nom,
            activites: r.activites,
            plats: r.plats,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DestinationDto {
    pub id: i32,
    pub logement: String,
    pub nom: String,
    pub activites: String,
    pub plats: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Destination> for DestinationDto {
    fn from(d: Destination) -> Self {
        Self {
            id: d.id,
            logement: d.logement,
            nom: d.nom,
            activites: d.activites,
            plats: d.plats,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DestinationListResponse {
    pub destinations: Vec<DestinationDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DestinationResponse {
    pub destination: DestinationDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DestinationCreatedResponse {
    pub message: String,
    pub destination: DestinationDto,
}
