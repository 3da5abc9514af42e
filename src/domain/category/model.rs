use chrono::{DateTime, Utc};

/// Itinerary category (e.g. "Monument", "Plage")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub titre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Itinerary count for one category
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    pub id: i32,
    pub titre: String,
    pub itineraire_count: i64,
}
