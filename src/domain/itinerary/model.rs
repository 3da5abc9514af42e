use chrono::{DateTime, Utc};

use crate::domain::destination::NewDestination;

/// Minimum number of destinations an itinerary must reference
pub const MIN_DESTINATIONS: usize = 2;

/// Stored itinerary scalar fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Itinerary {
    pub id: i32,
    pub titre: String,
    pub duree: String,
    pub image: String,
    pub category_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One destination entry of a create/update payload, as received.
///
/// Valid entries carry either `id` alone or all four inline fields.
#[derive(Clone, Debug, Default)]
pub struct DestinationInput {
    pub id: Option<i32>,
    pub logement: Option<String>,
    pub nom: Option<String>,
    pub activite: Option<String>,
    pub plats: Option<String>,
}

/// Unvalidated create/update payload
#[derive(Clone, Debug, Default)]
pub struct ItineraryInput {
    pub titre: String,
    pub duree: String,
    pub image: String,
    pub category_id: Option<i32>,
    pub destinations: Vec<DestinationInput>,
}

/// Destination reference after validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DestinationRef {
    Existing(i32),
    New(NewDestination),
}

/// Validated payload handed to the repository
#[derive(Clone, Debug)]
pub struct ItineraryDraft {
    pub titre: String,
    pub duree: String,
    pub image: String,
    pub category_id: i32,
    pub destinations: Vec<DestinationRef>,
}

/// Row restriction applied to the join-and-group read path
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItineraryFilter {
    All,
    Id(i32),
    Category(i32),
    /// Case-insensitive substring of `titre`
    TitleContains(String),
    Owner(i32),
    /// Itineraries bookmarked ("à visiter") by this user
    BookmarkedBy(i32),
}

/// Bookmark popularity entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopularItinerary {
    pub id: i32,
    pub titre: String,
    pub favoris_count: i64,
}
