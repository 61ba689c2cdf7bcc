//! Token signing and verification with configurable TTLs.
//!
//! Verification failures are deliberately uniform: expired, malformed,
//! bad-signature, and wrong-type tokens all surface the same
//! `Unauthenticated` error so callers cannot be used as an oracle for
//! why a token was rejected. The real reason is logged at debug level.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use skillswap_core::config::auth::AuthConfig;
use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;

use super::claims::{Claims, TokenType};

/// Message shared by every verification failure.
const INVALID_TOKEN: &str = "Invalid or expired token";

/// Signs and verifies session tokens over a process-wide secret.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

/// An access + refresh token pair minted at login or registration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    ///
    /// Fails when the configured TTLs violate the access < refresh
    /// invariant.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let access = chrono::Duration::minutes(config.access_ttl_minutes as i64);
        let refresh = chrono::Duration::days(config.refresh_ttl_days as i64);
        if access >= refresh {
            return Err(AppError::configuration(
                "access token TTL must be shorter than refresh token TTL",
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        })
    }

    /// Signs a new access token for the given member.
    pub fn sign_access(
        &self,
        member_id: Uuid,
        email: &str,
    ) -> AppResult<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.access_ttl_minutes);
        let token = self.sign(member_id, email, now, exp, TokenType::Access)?;
        Ok((token, exp))
    }

    /// Signs a new refresh token for the given member.
    pub fn sign_refresh(
        &self,
        member_id: Uuid,
        email: &str,
    ) -> AppResult<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.refresh_ttl_days);
        let token = self.sign(member_id, email, now, exp, TokenType::Refresh)?;
        Ok((token, exp))
    }

    /// Mints the access + refresh pair issued at login and registration.
    pub fn issue_pair(&self, member_id: Uuid, email: &str) -> AppResult<TokenPair> {
        let (access_token, access_expires_at) = self.sign_access(member_id, email)?;
        let (refresh_token, refresh_expires_at) = self.sign_refresh(member_id, email)?;
        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }

    /// Verifies an access token string.
    pub fn verify_access(&self, token: &str) -> AppResult<Claims> {
        self.verify(token, TokenType::Access)
    }

    /// Verifies a refresh token string.
    pub fn verify_refresh(&self, token: &str) -> AppResult<Claims> {
        self.verify(token, TokenType::Refresh)
    }

    fn sign(
        &self,
        member_id: Uuid,
        email: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        token_type: TokenType,
    ) -> AppResult<String> {
        let claims = Claims {
            sub: member_id,
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    fn verify(&self, token: &str, expected: TokenType) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Token verification failed");
                AppError::unauthenticated(INVALID_TOKEN)
            })?;

        if token_data.claims.token_type != expected {
            tracing::debug!("Token verification failed: wrong token type");
            return Err(AppError::unauthenticated(INVALID_TOKEN));
        }

        Ok(token_data.claims)
    }
}
