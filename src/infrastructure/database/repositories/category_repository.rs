//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    NotSet, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::db_err;
use crate::domain::{Category, CategoryCount, CategoryRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::{category, itinerary};

fn entity_to_domain(c: category::Model) -> Category {
    Category {
        id: c.id,
        titre: c.titre,
        created_at: c.created_at,
        updated_at: c.updated_at,
    }
}

#[derive(Debug, FromQueryResult)]
struct CategoryCountRow {
    id: i32,
    titre: String,
    itineraire_count: i64,
}

pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_all(&self) -> DomainResult<Vec<Category>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Category>> {
        let model = category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn create(&self, titre: &str) -> DomainResult<Category> {
        let now = Utc::now();
        let model = category::ActiveModel {
            id: NotSet,
            titre: Set(titre.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Category saved: {} ({})", result.titre, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, id: i32, titre: &str) -> DomainResult<Option<Category>> {
        let existing = category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: category::ActiveModel = existing.into();
        active.titre = Set(titre.to_string());
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(entity_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let in_use = itinerary::Entity::find()
            .filter(itinerary::Column::CategoryId.eq(id))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        if in_use > 0 {
            return Err(DomainError::Conflict(format!(
                "Category {} is used by {} itineraries",
                id, in_use
            )));
        }

        let result = category::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn count_itineraries(&self) -> DomainResult<Vec<CategoryCount>> {
        let rows = category::Entity::find()
            .select_only()
            .column(category::Column::Id)
            .column(category::Column::Titre)
            .column_as(itinerary::Column::Id.count(), "itineraire_count")
            .join(JoinType::InnerJoin, category::Relation::Itineraries.def())
            .group_by(category::Column::Id)
            .group_by(category::Column::Titre)
            .order_by_asc(category::Column::Id)
            .into_model::<CategoryCountRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| CategoryCount {
                id: r.id,
                titre: r.titre,
                itineraire_count: r.itineraire_count,
            })
            .collect())
    }
}
