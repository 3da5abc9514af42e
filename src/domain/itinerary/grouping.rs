//! Regrouping of flat join rows into nested itinerary records.
//!
//! The read path joins itineraires ⋈ users ⋈ categories ⋈
//! itineraire_destination ⋈ destinations, which yields one row per
//! (itinerary, destination) pair. `group_rows` folds those rows back into one
//! record per itinerary carrying its destinations in row order.

use std::collections::BTreeMap;

/// One row of the five-table join
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItineraryRow {
    pub itinerary_id: i32,
    pub titre: String,
    pub duree: String,
    pub image: String,
    pub user_name: String,
    pub category_name: String,
    pub destination_id: i32,
    pub logement: String,
    pub nom: String,
    pub activites: String,
    pub plats: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationSummary {
    pub logement: String,
    pub nom: String,
    pub activites: String,
    pub plats: String,
}

/// Itinerary with its destinations nested
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItinerarySummary {
    pub itinerary_id: i32,
    pub titre: String,
    pub duree: String,
    pub image: String,
    pub user_name: String,
    pub category_name: String,
    pub destinations: Vec<DestinationSummary>,
}

impl ItineraryRow {
    fn split(self) -> (ItinerarySummary, DestinationSummary) {
        let destination = DestinationSummary {
            logement: self.logement,
            nom: self.nom,
            activites: self.activites,
            plats: self.plats,
        };
        let summary = ItinerarySummary {
            itinerary_id: self.itinerary_id,
            titre: self.titre,
            duree: self.duree,
            image: self.image,
            user_name: self.user_name,
            category_name: self.category_name,
            destinations: Vec::new(),
        };
        (summary, destination)
    }
}

/// Group flat rows by itinerary id.
///
/// Output is ordered by itinerary id ascending whatever the input order.
/// Within a group, destinations keep the relative order of their rows, and
/// every row contributes one destination entry (no de-duplication). Scalar
/// fields are taken from the first row seen for each id.
pub fn group_rows<I>(rows: I) -> Vec<ItinerarySummary>
where
    I: IntoIterator<Item = ItineraryRow>,
{
    let mut groups: BTreeMap<i32, ItinerarySummary> = BTreeMap::new();

    for row in rows {
        let (summary, destination) = row.split();
        groups
            .entry(summary.itinerary_id)
            .or_insert(summary)
            .destinations
            .push(destination);
    }

    groups.into_values().collect()
}
