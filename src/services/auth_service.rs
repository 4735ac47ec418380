//! Authentication service - ABHA login, token issuance and verification.
//!
//! Tokens are stateless HS256 JWTs signed with a static secret. There is no
//! revocation list; an unexpired token stays valid across restarts.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::AbhaUser;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

#[cfg(test)]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub abha_id: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify ABHA ID + phone and issue an access token.
    ///
    /// The error does not reveal whether the ID or the phone was wrong.
    async fn login(&self, abha_id: &str, phone: &str) -> AppResult<(AbhaUser, String)>;

    /// Verify a JWT and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Fetch a user profile by ABHA ID
    async fn get_profile(&self, abha_id: &str) -> AppResult<AbhaUser>;
}

/// Generate a JWT for an ABHA ID (shared helper to avoid duplication)
fn generate_token(abha_id: &str, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        abha_id: abha_id.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Verify a JWT and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let mut validation = Validation::default();
    validation.set_required_spec_claims(&["exp"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService backed by the user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, abha_id: &str, phone: &str) -> AppResult<(AbhaUser, String)> {
        // Single combined match: an unknown ID and a wrong phone fail
        // identically, so callers cannot enumerate valid ABHA IDs.
        let user = self
            .users
            .find_by_credentials(abha_id, phone)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let token = generate_token(&user.abha_id, &self.config)?;
        Ok((user, token))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }

    async fn get_profile(&self, abha_id: &str) -> AppResult<AbhaUser> {
        self.users.find_by_abha_id(abha_id).await?.ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;

    fn test_user() -> AbhaUser {
        AbhaUser {
            abha_id: "ABHA123".to_string(),
            name: "Asha Kumari".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9999999999".to_string(),
            dob: "1990-04-12".to_string(),
            gender: "F".to_string(),
            address: "12 MG Road, Pune".to_string(),
            created_at: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn issued_token_verifies_and_embeds_abha_id() {
        let config = Config::for_tests();
        let token = generate_token("ABHA123", &config).unwrap();
        let claims = verify_token_internal(&token, &config).unwrap();

        assert_eq!(claims.abha_id, "ABHA123");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = Config::for_tests();
        let now = Utc::now();
        let claims = Claims {
            abha_id: "ABHA123".to_string(),
            // Well past the default validation leeway
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(26)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify_token_internal(&token, &config),
            Err(AppError::Jwt(_))
        ));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let config = Config::for_tests();
        assert!(verify_token_internal("not-a-jwt", &config).is_err());
    }

    #[tokio::test]
    async fn login_with_seeded_credentials_returns_verifiable_token() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_credentials()
            .returning(|_, _| Ok(Some(test_user())));

        let auth = Authenticator::new(Arc::new(repo), Config::for_tests());
        let (user, token) = auth.login("ABHA123", "9999999999").await.unwrap();

        assert_eq!(user.abha_id, "ABHA123");
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.abha_id, "ABHA123");
    }

    #[tokio::test]
    async fn login_failure_is_ambiguous() {
        // Wrong phone and unknown ID both surface the identical error
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_credentials().returning(|_, _| Ok(None));

        let auth = Authenticator::new(Arc::new(repo), Config::for_tests());

        let wrong_phone = auth.login("ABHA123", "0000000000").await.unwrap_err();
        let unknown_id = auth.login("NOPE", "9999999999").await.unwrap_err();

        assert!(matches!(wrong_phone, AppError::InvalidCredentials));
        assert!(matches!(unknown_id, AppError::InvalidCredentials));
        assert_eq!(wrong_phone.to_string(), unknown_id.to_string());
    }

    #[tokio::test]
    async fn get_profile_for_unknown_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_abha_id().returning(|_| Ok(None));

        let auth = Authenticator::new(Arc::new(repo), Config::for_tests());
        assert!(matches!(
            auth.get_profile("GHOST").await,
            Err(AppError::NotFound)
        ));
    }
}
