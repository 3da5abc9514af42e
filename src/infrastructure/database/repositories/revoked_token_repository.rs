//! SeaORM implementation of RevokedTokenRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::db_err;
use crate::domain::{DomainResult, RevokedTokenRepository};
use crate::infrastructure::database::entities::revoked_token;

pub struct SeaOrmRevokedTokenRepository {
    db: DatabaseConnection,
}

impl SeaOrmRevokedTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RevokedTokenRepository for SeaOrmRevokedTokenRepository {
    async fn revoke(&self, token_id: &str, expires_at: DateTime<Utc>) -> DomainResult<()> {
        let model = revoked_token::ActiveModel {
            jti: Set(token_id.to_string()),
            expires_at: Set(expires_at),
            revoked_at: Set(Utc::now()),
        };

        revoked_token::Entity::insert(model)
            .on_conflict(
                OnConflict::column(revoked_token::Column::Jti)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn is_revoked(&self, token_id: &str) -> DomainResult<bool> {
        let found = revoked_token::Entity::find_by_id(token_id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let result = revoked_token::Entity::delete_many()
            .filter(revoked_token::Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
