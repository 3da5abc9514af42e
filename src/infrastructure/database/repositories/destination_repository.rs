//! SeaORM implementation of DestinationRepository

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::db_err;
use crate::domain::{Destination, DestinationRepository, DomainResult, NewDestination};
use crate::infrastructure::database::entities::destination;

fn entity_to_domain(d: destination::Model) -> Destination {
    Destination {
        id: d.id,
        logement: d.logement,
        nom: d.nom,
        activites: d.activites,
        plats: d.plats,
        created_at: d.created_at,
        updated_at: d.updated_at,
    }
}

/// Insert one destination on any connection, including an open transaction
pub(crate) async fn insert_destination<C: ConnectionTrait>(
    db: &C,
    new: NewDestination,
) -> Result<destination::Model, sea_orm::DbErr> {
    let now = Utc::now();
    destination::ActiveModel {
        id: NotSet,
        logement: Set(new.logement),
        nom: Set(new.nom),
        activites: Set(new.activites),
        plats: Set(new.plats),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
}

pub struct SeaOrmDestinationRepository {
    db: DatabaseConnection,
}

impl SeaOrmDestinationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DestinationRepository for SeaOrmDestinationRepository {
    async fn find_all(&self) -> DomainResult<Vec<Destination>> {
        let models = destination::Entity::find()
            .order_by_asc(destination::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Destination>> {
        let model = destination::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn create(&self, new: NewDestination) -> DomainResult<Destination> {
        let model = insert_destination(&self.db, new).await.map_err(db_err)?;
        Ok(entity_to_domain(model))
    }

    async fn missing_ids(&self, ids: &[i32]) -> DomainResult<Vec<i32>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i32> = destination::Entity::find()
            .select_only()
            .column(destination::Column::Id)
            .filter(destination::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .collect();

        let mut seen = HashSet::new();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id) && seen.insert(*id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;

    fn new_destination(nom: &str) -> NewDestination {
        NewDestination {
            logement: "Riad".to_string(),
            nom: nom.to_string(),
            activites: "souk".to_string(),
            plats: "tajine".to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_list() {
        let repo = SeaOrmDestinationRepository::new(test_db().await);
        let safi = repo.create(new_destination("Safi")).await.unwrap();
        repo.create(new_destination("Fes")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].nom, "Safi");
        assert_eq!(repo.find_by_id(safi.id).await.unwrap().unwrap().plats, "tajine");
    }

    #[tokio::test]
    async fn missing_ids_reports_unknown_ids_once() {
        let repo = SeaOrmDestinationRepository::new(test_db().await);
        let safi = repo.create(new_destination("Safi")).await.unwrap();

        let missing = repo.missing_ids(&[safi.id, 404, 404, 405]).await.unwrap();
        assert_eq!(missing, vec![404, 405]);
        assert!(repo.missing_ids(&[]).await.unwrap().is_empty());
    }
}
