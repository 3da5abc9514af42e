//! Revoked bearer tokens (logout blacklist)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::DomainResult;

#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
    /// Revoking an already revoked token is a no-op
    async fn revoke(&self, token_id: &str, expires_at: DateTime<Utc>) -> DomainResult<()>;
    async fn is_revoked(&self, token_id: &str) -> DomainResult<bool>;
    /// Drop entries whose token would be rejected as expired anyway
    async fn purge_expired(&self, now: DateTime<Utc>) -> DomainResult<u64>;
}
