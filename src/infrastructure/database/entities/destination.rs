//! Destination entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "destinations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub logement: String,
    pub nom: String,
    pub activites: String,
    pub plats: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::itinerary_destination::Entity")]
    ItineraryDestinations,
}

impl Related<super::itinerary_destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItineraryDestinations.def()
    }
}

impl Related<super::itinerary::Entity> for Entity {
    fn to() -> RelationDef {
        super::itinerary_destination::Relation::Itinerary.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::itinerary_destination::Relation::Destination.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
