//! Category use-cases

use std::sync::Arc;

use log::info;

use crate::domain::{Category, DomainError, DomainResult, RepositoryProvider};
use crate::shared::errors::FieldErrorsBuilder;

pub struct CategoryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CategoryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<Category>> {
        self.repos.categories().find_all().await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Category> {
        self.repos
            .categories()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", id))
    }

    pub async fn create(&self, titre: &str) -> DomainResult<Category> {
        let mut errors = FieldErrorsBuilder::new();
        errors.require("titre", titre);
        errors.finish()?;

        self.repos.categories().create(titre.trim()).await
    }

    pub async fn update(&self, id: i32, titre: &str) -> DomainResult<Category> {
        let mut errors = FieldErrorsBuilder::new();
        errors.require("titre", titre);
        errors.finish()?;

        self.repos
            .categories()
            .update(id, titre.trim())
            .await?
            .ok_or_else(|| DomainError::not_found("Category", id))
    }

    /// Fails with `Conflict` while itineraries still use the category.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repos.categories().delete(id).await? {
            return Err(DomainError::not_found("Category", id));
        }
        info!("Category {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::test_support::test_db;

    async fn service() -> CategoryService {
        CategoryService::new(Arc::new(SeaOrmRepositoryProvider::new(test_db().await)))
    }

    #[tokio::test]
    async fn blank_titre_is_rejected() {
        let svc = service().await;
        let err = svc.create("   ").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidFields(ref f) if f.contains_key("titre")));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let svc = service().await;
        assert!(matches!(svc.get(7).await, Err(DomainError::NotFound { .. })));
        assert!(matches!(svc.update(7, "x").await, Err(DomainError::NotFound { .. })));
        assert!(matches!(svc.delete(7).await, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn create_update_delete() {
        let svc = service().await;
        let created = svc.create(" Monument ").await.unwrap();
        assert_eq!(created.titre, "Monument");

        let updated = svc.update(created.id, "Plage").await.unwrap();
        assert_eq!(svc.get(created.id).await.unwrap().titre, updated.titre);

        svc.delete(created.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
