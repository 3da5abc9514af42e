//! SeaORM implementation of BookmarkRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use super::{db_err, is_unique_violation};
use crate::domain::{BookmarkRepository, DomainResult};
use crate::infrastructure::database::entities::bookmark;

pub struct SeaOrmBookmarkRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookmarkRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkRepository for SeaOrmBookmarkRepository {
    async fn add(&self, user_id: i32, itinerary_id: i32) -> DomainResult<bool> {
        let model = bookmark::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            itinerary_id: Set(itinerary_id),
            created_at: Set(Utc::now()),
        };

        match model.insert(&self.db).await {
            Ok(_) => Ok(true),
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn remove(&self, user_id: i32, itinerary_id: i32) -> DomainResult<bool> {
        let result = bookmark::Entity::delete_many()
            .filter(bookmark::Column::UserId.eq(user_id))
            .filter(bookmark::Column::ItineraryId.eq(itinerary_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
