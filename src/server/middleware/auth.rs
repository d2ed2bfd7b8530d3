use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::access_token::AccessTokenRepository,
        error::{auth::AuthError, internal::InternalError, AppError},
        model::auth::AuthSession,
        service::auth::token::TokenSigner,
    },
};

/// Role gate for handlers.
///
/// Checks run in order: bearer header present, signature and expiry valid,
/// session row still stored, session role allowed.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    signer: &'a TokenSigner,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, signer: &'a TokenSigner, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            signer,
            headers,
        }
    }

    /// Authenticates the caller and checks their role.
    ///
    /// An empty `roles` slice admits any authenticated caller.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - The authenticated caller
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, encoding or expiry
    /// - `Err(AuthError::ExpiredToken)` - The session was logged out or pruned
    /// - `Err(AuthError::InvalidPermissions)` - The session's role is not allowed
    pub async fn require(&self, roles: &[Role]) -> Result<AuthSession, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.signer.verify(token)?;

        let Some(session) = AccessTokenRepository::new(self.db)
            .find_by_token(token)
            .await?
        else {
            return Err(AuthError::ExpiredToken.into());
        };

        let role = session
            .role
            .parse::<Role>()
            .map_err(|_| InternalError::UnknownRole {
                user_id: session.user_id.clone(),
                value: session.role.clone(),
            })?;

        if !roles.is_empty() && !roles.contains(&role) {
            return Err(AuthError::InvalidPermissions {
                user_id: session.user_id,
                role,
            }
            .into());
        }

        Ok(AuthSession {
            user_id: session.user_id,
            email: session.email,
            role,
            station_id: claims.station,
            token: token.to_string(),
        })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
