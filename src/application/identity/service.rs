//! Identity service, application-layer orchestration
//!
//! HTTP handlers and the auth middleware are thin wrappers that delegate
//! here.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{
    Caller, DomainError, DomainResult, NewUser, RepositoryProvider, User, UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, verify_token, IssuedToken, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::errors::FieldErrorsBuilder;

/// Successful registration or login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub expires_in: i64,
    pub user: User,
}

pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
    bcrypt_cost: u32,
}

impl IdentityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig, bcrypt_cost: u32) -> Self {
        Self {
            repos,
            jwt_config,
            bcrypt_cost,
        }
    }

    fn issue(&self, user: User) -> DomainResult<AuthResult> {
        let IssuedToken { token, claims } =
            create_token(user.id, &user.name, user.role.as_str(), &self.jwt_config)
                .map_err(|e| DomainError::Crypto(format!("Failed to create token: {}", e)))?;

        Ok(AuthResult {
            token,
            expires_in: claims.exp - claims.iat,
            user,
        })
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new user with the default role and sign them in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<AuthResult> {
        let mut errors = FieldErrorsBuilder::new();
        errors.require("name", name);
        errors.require("email", email);
        errors.require("password", password);
        errors.finish()?;

        let taken = || DomainError::invalid_field("email", "The email has already been taken.");

        if self.repos.users().find_by_email(email).await?.is_some() {
            return Err(taken());
        }

        let password_hash = hash_password(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Crypto(format!("Failed to hash password: {}", e)))?;

        let user = self
            .repos
            .users()
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::User,
            })
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration
                DomainError::Conflict(_) => taken(),
                other => other,
            })?;

        info!(user_id = user.id, email = %user.email, "New user registered");
        self.issue(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Check credentials and return a fresh bearer token.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let Some(user) = self.repos.users().find_by_email(email).await? else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            warn!(email, "Failed login attempt");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        debug!(user_id = user.id, "User logged in");
        self.issue(user)
    }

    /// Resolve a bearer token into the calling identity.
    ///
    /// Rejects bad signatures, foreign issuers, expired and revoked tokens.
    pub async fn verify(&self, token: &str) -> DomainResult<Caller> {
        let claims = verify_token(token, &self.jwt_config)
            .map_err(|_| DomainError::Unauthorized("Invalid or expired token".into()))?;

        let user_id = claims
            .user_id()
            .ok_or_else(|| DomainError::Unauthorized("Invalid token subject".into()))?;

        if self.repos.revoked_tokens().is_revoked(&claims.jti).await? {
            return Err(DomainError::Unauthorized("Token has been revoked".into()));
        }

        Ok(Caller {
            user_id,
            name: claims.name.clone(),
            role: UserRole::parse(&claims.role),
            expires_at: claims.expires_at(),
            token_id: claims.jti,
        })
    }

    /// Revoke the caller's token until it would have expired anyway.
    pub async fn invalidate(&self, caller: &Caller) -> DomainResult<()> {
        self.repos
            .revoked_tokens()
            .revoke(&caller.token_id, caller.expires_at)
            .await?;

        let purged = self.repos.revoked_tokens().purge_expired(Utc::now()).await?;
        if purged > 0 {
            debug!(purged, "Purged expired revoked tokens");
        }

        info!(user_id = caller.user_id, "User logged out");
        Ok(())
    }

    pub async fn current_user(&self, caller: &Caller) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", caller.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::test_support::{test_db, TEST_BCRYPT_COST, TEST_PASSWORD};

    async fn service() -> IdentityService {
        let repos = Arc::new(SeaOrmRepositoryProvider::new(test_db().await));
        let jwt = JwtConfig {
            secret: "test-secret".into(),
            expiration_hours: 1,
            issuer: "itinerary-api".into(),
        };
        IdentityService::new(repos, jwt, TEST_BCRYPT_COST)
    }

    #[tokio::test]
    async fn register_then_login() {
        let svc = service().await;

        let registered = svc.register("Hamza", "h@example.com", TEST_PASSWORD).await.unwrap();
        assert!(!registered.token.is_empty());
        assert_eq!(registered.user.role, UserRole::User);
        assert_ne!(registered.user.password_hash, TEST_PASSWORD);

        let logged_in = svc.authenticate("h@example.com", TEST_PASSWORD).await.unwrap();
        assert_eq!(logged_in.user.id, registered.user.id);

        let caller = svc.verify(&logged_in.token).await.unwrap();
        assert_eq!(caller.user_id, registered.user.id);
        assert_eq!(caller.name, "Hamza");
    }

    #[tokio::test]
    async fn expires_in_matches_issued_token_lifetime() {
        let svc = service().await;
        let registered = svc.register("Imane", "i@example.com", TEST_PASSWORD).await.unwrap();
        assert_eq!(registered.expires_in, 3600);

        let caller = svc.verify(&registered.token).await.unwrap();
        let remaining = (caller.expires_at - chrono::Utc::now()).num_seconds();
        assert!(remaining > 0 && remaining <= registered.expires_in);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_field_error() {
        let svc = service().await;
        svc.register("A", "dup@example.com", TEST_PASSWORD).await.unwrap();

        let err = svc.register("B", "dup@example.com", TEST_PASSWORD).await.unwrap_err();
        let DomainError::InvalidFields(fields) = err else {
            panic!("expected InvalidFields, got {err:?}");
        };
        assert!(fields.contains_key("email"));
    }

    #[tokio::test]
    async fn missing_fields_are_reported_together() {
        let svc = service().await;
        let err = svc.register("", "", "").await.unwrap_err();
        let DomainError::InvalidFields(fields) = err else {
            panic!("expected InvalidFields");
        };
        assert_eq!(fields.len(), 3);
    }

    #[tokio::test]
    async fn bad_credentials_never_yield_a_token() {
        let svc = service().await;
        svc.register("A", "a@example.com", TEST_PASSWORD).await.unwrap();

        let wrong = svc.authenticate("a@example.com", "nope").await.unwrap_err();
        assert!(matches!(wrong, DomainError::Unauthorized(_)));

        let unknown = svc.authenticate("ghost@example.com", TEST_PASSWORD).await.unwrap_err();
        assert!(matches!(unknown, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn logout_revokes_only_that_token() {
        let svc = service().await;
        let first = svc.register("A", "a@example.com", TEST_PASSWORD).await.unwrap();
        let second = svc.authenticate("a@example.com", TEST_PASSWORD).await.unwrap();

        let caller = svc.verify(&first.token).await.unwrap();
        svc.invalidate(&caller).await.unwrap();

        assert!(matches!(
            svc.verify(&first.token).await,
            Err(DomainError::Unauthorized(_))
        ));
        assert!(svc.verify(&second.token).await.is_ok());
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let svc = service().await;
        assert!(matches!(
            svc.verify("not.a.jwt").await,
            Err(DomainError::Unauthorized(_))
        ));
    }
}
