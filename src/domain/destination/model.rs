use chrono::{DateTime, Utc};

/// A place with lodging, activities and local dishes; reusable across
/// itineraries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    pub id: i32,
    pub logement: String,
    pub nom: String,
    pub activites: String,
    pub plats: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewDestination {
    pub logement: String,
    pub nom: String,
    pub activites: String,
    pub plats: String,
}
