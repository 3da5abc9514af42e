//! SeaORM implementation of ItineraryRepository
//!
//! Reads go through one five-table join projected into `ItineraryRow`; writes
//! run inside a single transaction so a failed destination insert leaves no
//! partial itinerary behind.

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, JoinType, NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    Set, TransactionTrait,
};

use super::db_err;
use super::destination_repository::insert_destination;
use crate::domain::{
    DestinationRef, DomainResult, Itinerary, ItineraryDraft, ItineraryFilter,
    ItineraryRepository, ItineraryRow, PopularItinerary,
};
use crate::infrastructure::database::entities::{
    bookmark, category, destination, itinerary, itinerary_destination, user,
};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: itinerary::Model) -> Itinerary {
    Itinerary {
        id: m.id,
        titre: m.titre,
        duree: m.duree,
        image: m.image,
        category_id: m.category_id,
        user_id: m.user_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[derive(Debug, FromQueryResult)]
struct JoinedRow {
    itinerary_id: i32,
    titre: String,
    duree: String,
    image: String,
    user_name: String,
    category_name: String,
    destination_id: i32,
    logement: String,
    nom: String,
    activites: String,
    plats: String,
}

impl From<JoinedRow> for ItineraryRow {
    fn from(r: JoinedRow) -> Self {
        ItineraryRow {
            itinerary_id: r.itinerary_id,
            titre: r.titre,
            duree: r.duree,
            image: r.image,
            user_name: r.user_name,
            category_name: r.category_name,
            destination_id: r.destination_id,
            logement: r.logement,
            nom: r.nom,
            activites: r.activites,
            plats: r.plats,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct PopularRow {
    id: i32,
    titre: String,
    favoris_count: i64,
}

/// itineraires ⋈ users ⋈ categories ⋈ itineraire_destination ⋈ destinations
fn joined_rows() -> Select<itinerary::Entity> {
    itinerary::Entity::find()
        .select_only()
        .column_as(itinerary::Column::Id, "itinerary_id")
        .column(itinerary::Column::Titre)
        .column(itinerary::Column::Duree)
        .column(itinerary::Column::Image)
        .column_as(user::Column::Name, "user_name")
        .column_as(category::Column::Titre, "category_name")
        .column_as(destination::Column::Id, "destination_id")
        .column(destination::Column::Logement)
        .column(destination::Column::Nom)
        .column(destination::Column::Activites)
        .column(destination::Column::Plats)
        .join(JoinType::InnerJoin, itinerary::Relation::User.def())
        .join(JoinType::InnerJoin, itinerary::Relation::Category.def())
        .join(
            JoinType::InnerJoin,
            itinerary::Relation::ItineraryDestinations.def(),
        )
        .join(
            JoinType::InnerJoin,
            itinerary_destination::Relation::Destination.def(),
        )
}

fn apply_filter(query: Select<itinerary::Entity>, filter: ItineraryFilter) -> Select<itinerary::Entity> {
    match filter {
        ItineraryFilter::All => query,
        ItineraryFilter::Id(id) => query.filter(itinerary::Column::Id.eq(id)),
        ItineraryFilter::Category(category_id) => {
            query.filter(itinerary::Column::CategoryId.eq(category_id))
        }
        // SQLite `lower()` only folds ASCII; matched in `find_rows` instead
        ItineraryFilter::TitleContains(_) => query,
        ItineraryFilter::Owner(user_id) => query.filter(itinerary::Column::UserId.eq(user_id)),
        ItineraryFilter::BookmarkedBy(user_id) => query.filter(
            itinerary::Column::Id.in_subquery(
                Query::select()
                    .column(bookmark::Column::ItineraryId)
                    .from(bookmark::Entity)
                    .and_where(bookmark::Column::UserId.eq(user_id))
                    .to_owned(),
            ),
        ),
    }
}

/// Unicode case-insensitive substring test; `needle` is already lowercased.
fn title_matches(titre: &str, needle: &str) -> bool {
    titre.to_lowercase().contains(needle)
}

/// Attach every destination of the draft, creating the inline ones first.
/// Association ids grow in list order, which is the order reads return.
async fn attach_destinations<C: ConnectionTrait>(
    db: &C,
    itinerary_id: i32,
    destinations: Vec<DestinationRef>,
) -> Result<(), sea_orm::DbErr> {
    for destination in destinations {
        let destination_id = match destination {
            DestinationRef::Existing(id) => id,
            DestinationRef::New(new) => insert_destination(db, new).await?.id,
        };

        itinerary_destination::ActiveModel {
            id: NotSet,
            itinerary_id: Set(itinerary_id),
            destination_id: Set(destination_id),
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

// ── SeaOrmItineraryRepository ───────────────────────────────────

pub struct SeaOrmItineraryRepository {
    db: DatabaseConnection,
}

impl SeaOrmItineraryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItineraryRepository for SeaOrmItineraryRepository {
    async fn find_rows(&self, filter: ItineraryFilter) -> DomainResult<Vec<ItineraryRow>> {
        let needle = match &filter {
            ItineraryFilter::TitleContains(term) => Some(term.to_lowercase()),
            _ => None,
        };

        let rows = apply_filter(joined_rows(), filter)
            .order_by_asc(itinerary::Column::Id)
            .order_by_asc(itinerary_destination::Column::Id)
            .into_model::<JoinedRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .filter(|row| {
                needle
                    .as_deref()
                    .map_or(true, |needle| title_matches(&row.titre, needle))
            })
            .map(ItineraryRow::from)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Itinerary>> {
        let model = itinerary::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn destination_ids(&self, id: i32) -> DomainResult<Vec<i32>> {
        itinerary_destination::Entity::find()
            .select_only()
            .column(itinerary_destination::Column::DestinationId)
            .filter(itinerary_destination::Column::ItineraryId.eq(id))
            .order_by_asc(itinerary_destination::Column::Id)
            .into_tuple::<i32>()
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn create(&self, user_id: i32, draft: ItineraryDraft) -> DomainResult<Itinerary> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let now = Utc::now();

        let model = itinerary::ActiveModel {
            id: NotSet,
            titre: Set(draft.titre),
            duree: Set(draft.duree),
            image: Set(draft.image),
            category_id: Set(draft.category_id),
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        attach_destinations(&txn, model.id, draft.destinations)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        info!("Itinerary created: {} ({})", model.titre, model.id);
        Ok(entity_to_domain(model))
    }

    async fn replace(&self, id: i32, draft: ItineraryDraft) -> DomainResult<Option<Itinerary>> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = itinerary::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: itinerary::ActiveModel = existing.into();
        active.titre = Set(draft.titre);
        active.duree = Set(draft.duree);
        active.image = Set(draft.image);
        active.category_id = Set(draft.category_id);
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await.map_err(db_err)?;

        itinerary_destination::Entity::delete_many()
            .filter(itinerary_destination::Column::ItineraryId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        attach_destinations(&txn, id, draft.destinations)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        info!("Itinerary updated: {} ({})", updated.titre, updated.id);
        Ok(Some(entity_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;

        bookmark::Entity::delete_many()
            .filter(bookmark::Column::ItineraryId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        itinerary_destination::Entity::delete_many()
            .filter(itinerary_destination::Column::ItineraryId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = itinerary::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn most_bookmarked(&self, limit: u64) -> DomainResult<Vec<PopularItinerary>> {
        let rows = itinerary::Entity::find()
            .select_only()
            .column(itinerary::Column::Id)
            .column(itinerary::Column::Titre)
            .column_as(bookmark::Column::Id.count(), "favoris_count")
            .join(JoinType::InnerJoin, itinerary::Relation::Bookmarks.def())
            .group_by(itinerary::Column::Id)
            .group_by(itinerary::Column::Titre)
            .order_by_desc(bookmark::Column::Id.count())
            .order_by_asc(itinerary::Column::Id)
            .limit(limit)
            .into_model::<PopularRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| PopularItinerary {
                id: r.id,
                titre: r.titre,
                favoris_count: r.favoris_count,
            })
            .collect())
    }
}
