//! Itinerary DTOs
//!
//! Read endpoints return itineraries grouped with their destinations, keyed by
//! itinerary id: `{"itineraires": {"6": {"itineraire_id": 6, ..., "destinations": [...]}}}`.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    CategoryCount, DestinationInput, DestinationSummary, Itinerary, ItineraryInput,
    ItinerarySummary, PopularItinerary,
};

// ── Requests ────────────────────────────────────────────────────

/// One destination of a create/update payload: either `id` of an existing
/// destination or the four inline fields.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DestinationEntry {
    pub id: Option<i32>,
    pub logement: Option<String>,
    pub nom: Option<String>,
    #[serde(alias = "activites")]
    pub activite: Option<String>,
    pub plats: Option<String>,
}

/// Create/update payload.
///
/// Only length limits are checked here; required fields, the destination
/// count and referenced ids are checked by the service so that every
/// violation is reported in one response.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ItineraryRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "The titre may not be greater than 255 characters."))]
    pub titre: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "The duree may not be greater than 255 characters."))]
    pub duree: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "The image may not be greater than 255 characters."))]
    pub image: String,
    pub categorie_id: Option<i32>,
    #[serde(default)]
    pub destinations: Vec<DestinationEntry>,
}

impl From<DestinationEntry> for DestinationInput {
    fn from(e: DestinationEntry) -> Self {
        Self {
            id: e.id,
            logement: e.logement,
            nom: e.nom,
            activite: e.activite,
            plats: e.plats,
        }
    }
}

impl From<ItineraryRequest> for ItineraryInput {
    fn from(r: ItineraryRequest) -> Self {
        Self {
            titre: r.titre,
            duree: r.duree,
            image: r.image,
            category_id: r.categorie_id,
            destinations: r.destinations.into_iter().map(DestinationInput::from).collect(),
        }
    }
}

// ── Grouped read model ──────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct DestinationSummaryDto {
    pub logement: String,
    pub nom: String,
    pub activites: String,
    pub plats: String,
}

impl From<DestinationSummary> for DestinationSummaryDto {
    fn from(d: DestinationSummary) -> Self {
        Self {
            logement: d.logement,
            nom: d.nom,
            activites: d.activites,
            plats: d.plats,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItinerarySummaryDto {
    pub itineraire_id: i32,
    pub titre: String,
    pub duree: String,
    pub image: String,
    pub user_name: String,
    pub category_name: String,
    pub destinations: Vec<DestinationSummaryDto>,
}

impl From<ItinerarySummary> for ItinerarySummaryDto {
    fn from(s: ItinerarySummary) -> Self {
        Self {
            itineraire_id: s.itinerary_id,
            titre: s.titre,
            duree: s.duree,
            image: s.image,
            user_name: s.user_name,
            category_name: s.category_name,
            destinations: s
                .destinations
                .into_iter()
                .map(DestinationSummaryDto::from)
                .collect(),
        }
    }
}

/// Grouped itineraries serialized as an object keyed by itinerary id, in
/// ascending id order.
#[derive(Debug)]
pub struct GroupedItineraries(pub Vec<ItinerarySummaryDto>);

impl Serialize for GroupedItineraries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for itinerary in &self.0 {
            map.serialize_entry(&itinerary.itineraire_id.to_string(), itinerary)?;
        }
        map.end()
    }
}

impl From<Vec<ItinerarySummary>> for GroupedItineraries {
    fn from(summaries: Vec<ItinerarySummary>) -> Self {
        Self(summaries.into_iter().map(ItinerarySummaryDto::from).collect())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GroupedItinerariesResponse {
    #[schema(value_type = Object)]
    pub itineraires: GroupedItineraries,
}

impl From<Vec<ItinerarySummary>> for GroupedItinerariesResponse {
    fn from(summaries: Vec<ItinerarySummary>) -> Self {
        Self {
            itineraires: summaries.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItinerarySummaryResponse {
    pub itineraire: ItinerarySummaryDto,
}

// ── Write responses ─────────────────────────────────────────────

/// Stored itinerary as returned after a write
#[derive(Debug, Serialize, ToSchema)]
pub struct ItineraryDto {
    pub id: i32,
    pub titre: String,
    pub duree: String,
    pub image: String,
    pub categorie_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Itinerary> for ItineraryDto {
    fn from(i: Itinerary) -> Self {
        Self {
            id: i.id,
            titre: i.titre,
            duree: i.duree,
            image: i.image,
            categorie_id: i.category_id,
            user_id: i.user_id,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItineraryMutationResponse {
    pub message: String,
    pub itineraire: ItineraryDto,
}

// ── Reports ─────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct PopularItineraryDto {
    pub id: i32,
    pub titre: String,
    pub favoris_count: i64,
}

impl From<PopularItinerary> for PopularItineraryDto {
    fn from(p: PopularItinerary) -> Self {
        Self {
            id: p.id,
            titre: p.titre,
            favoris_count: p.favoris_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopItinerariesResponse {
    pub itineraires: Vec<PopularItineraryDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCountDto {
    pub id: i32,
    pub titre: String,
    pub itineraire_count: i64,
}

impl From<CategoryCount> for CategoryCountDto {
    fn from(c: CategoryCount) -> Self {
        Self {
            id: c.id,
            titre: c.titre,
            itineraire_count: c.itineraire_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCountsResponse {
    pub itineraires: Vec<CategoryCountDto>,
}
