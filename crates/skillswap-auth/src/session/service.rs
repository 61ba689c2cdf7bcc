//! Login, registration, and token refresh flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;
use skillswap_core::traits::MemberDirectory;
use skillswap_core::types::Member;

use crate::jwt::{TokenCodec, TokenPair};
use crate::password::PasswordHasher;

/// Credential failures are uniform so the login endpoint cannot be used to
/// probe which emails exist.
const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Result of a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthenticatedMember {
    /// The authenticated member.
    pub member: Member,
    /// Freshly minted token pair.
    pub tokens: TokenPair,
}

/// Drives the register/login/refresh flows over the member directory port.
#[derive(Clone)]
pub struct SessionService {
    /// Token codec for minting and verifying tokens.
    codec: Arc<TokenCodec>,
    /// Member persistence.
    directory: Arc<dyn MemberDirectory>,
    /// Password hasher.
    hasher: PasswordHasher,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("codec", &self.codec)
            .finish()
    }
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(
        codec: Arc<TokenCodec>,
        directory: Arc<dyn MemberDirectory>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            codec,
            directory,
            hasher,
        }
    }

    /// Registers a new member and mints their first token pair.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<AuthenticatedMember> {
        let email = normalize_email(email);

        if self.directory.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let member = self.directory.insert(Member::new(email, password_hash)).await?;
        let tokens = self.codec.issue_pair(member.id, &member.email)?;

        info!(member_id = %member.id, "Member registered");
        Ok(AuthenticatedMember { member, tokens })
    }

    /// Verifies credentials and mints a fresh token pair.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthenticatedMember> {
        let email = normalize_email(email);

        let member = self
            .directory
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::unauthenticated(BAD_CREDENTIALS))?;

        if !self.hasher.verify_password(password, &member.password_hash)? {
            return Err(AppError::unauthenticated(BAD_CREDENTIALS));
        }

        let tokens = self.codec.issue_pair(member.id, &member.email)?;

        info!(member_id = %member.id, "Member logged in");
        Ok(AuthenticatedMember { member, tokens })
    }

    /// Exchanges a valid refresh token for a new access token.
    ///
    /// The refresh token itself is not rotated; it stays valid until its
    /// own expiry or the next login.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(String, DateTime<Utc>)> {
        let claims = self.codec.verify_refresh(refresh_token)?;
        self.codec.sign_access(claims.sub, &claims.email)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
