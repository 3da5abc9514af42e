//! Standalone destination use-cases

use std::sync::Arc;

use crate::domain::{Destination, DomainError, DomainResult, NewDestination, RepositoryProvider};
use crate::shared::errors::FieldErrorsBuilder;

pub struct DestinationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl DestinationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<Destination>> {
        self.repos.destinations().find_all().await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Destination> {
        self.repos
            .destinations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Destination", id))
    }

    pub async fn create(&self, destination: NewDestination) -> DomainResult<Destination> {
        let mut errors = FieldErrorsBuilder::new();
        errors.require("logement", &destination.logement);
        errors.require("nom", &destination.nom);
        errors.require("activites", &destination.activites);
        errors.require("plats", &destination.plats);
        errors.finish()?;

        self.repos.destinations().create(destination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::test_support::test_db;

    #[tokio::test]
    async fn every_field_is_required() {
        let svc = DestinationService::new(Arc::new(SeaOrmRepositoryProvider::new(test_db().await)));

        let err = svc
            .create(NewDestination {
                logement: "Riad".into(),
                nom: String::new(),
                activites: String::new(),
                plats: "tanjia".into(),
            })
            .await
            .unwrap_err();

        let DomainError::InvalidFields(fields) = err else {
            panic!("expected InvalidFields");
        };
        assert_eq!(fields.keys().collect::<Vec<_>>(), ["activites", "nom"]);
    }

    #[tokio::test]
    async fn create_then_get() {
        let svc = DestinationService::new(Arc::new(SeaOrmRepositoryProvider::new(test_db().await)));
        let created = svc
            .create(NewDestination {
                logement: "Riad".into(),
                nom: "Safi".into(),
                activites: "pottery".into(),
                plats: "sardines".into(),
            })
            .await
            .unwrap();

        assert_eq!(svc.get(created.id).await.unwrap().nom, "Safi");
        assert!(matches!(svc.get(created.id + 1).await, Err(DomainError::NotFound { .. })));
    }
}
