//! Login and logout.
//!
//! A login checks the password against the stored argon2 hash, signs a JWT
//! and records it as an access-token session. The auth guard only honours a
//! token while its session row exists, so logout is a delete of that row.

pub mod password;
pub mod token;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginDto, TokenDto},
    server::{
        data::{
            access_token::{AccessTokenRepository, CreateAccessTokenParam},
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
    },
};

use self::{password::verify_password, token::TokenSigner};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    signer: &'a TokenSigner,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, signer: &'a TokenSigner) -> Self {
        Self { db, signer }
    }

    /// Exchanges credentials for a signed bearer token.
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - The token and its expiry (seconds since the epoch)
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, credentials: LoginDto) -> Result<TokenDto, AppError> {
        let email = credentials.email.trim().to_lowercase();

        let Some((user, password_hash)) =
            UserRepository::new(self.db).find_credentials(&email).await?
        else {
            tracing::debug!("Login attempt for unknown email {}", email);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &password_hash) {
            tracing::debug!("Wrong password for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let (token, claims) = self.signer.issue(&user)?;
        AccessTokenRepository::new(self.db)
            .create(CreateAccessTokenParam {
                token: token.clone(),
                user_id: user.id.clone(),
                email: user.email.clone(),
                role: user.role.as_str().to_string(),
            })
            .await?;

        tracing::info!("User {} logged in", user.id);

        Ok(TokenDto {
            token,
            expires_at: claims.exp,
        })
    }

    /// Ends the session holding `token`.
    ///
    /// Logging out twice is not an error; the second call removes nothing.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let removed = AccessTokenRepository::new(self.db)
            .delete_by_token(token)
            .await?;

        tracing::debug!("Logout removed {} session(s)", removed);

        Ok(())
    }

    /// Deletes sessions older than the token lifetime. Their tokens have
    /// already expired, so the rows can never be used again.
    pub async fn prune_sessions(&self) -> Result<u64, AppError> {
        let cutoff = Utc::now() - self.signer.ttl();
        let removed = AccessTokenRepository::new(self.db)
            .prune_older_than(cutoff)
            .await?;

        Ok(removed)
    }
}
