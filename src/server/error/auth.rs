use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, user::Role},
    server::error::InternalServerError,
};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token is malformed, badly signed or past its expiry.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The token is well formed but its session row no longer exists
    /// (logged out or pruned).
    #[error("Session for token no longer exists")]
    ExpiredToken,

    /// The session's role is not among the roles the endpoint allows.
    #[error("User {user_id} with role {role} is not allowed to access this resource")]
    InvalidPermissions { user_id: String, role: Role },

    /// Unknown email or wrong password on login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A station-scoped endpoint was called by a user without a station.
    #[error("User {0} is not assigned to a station")]
    StationNotAssigned(String),

    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Token signing failed.
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `ExpiredToken` / `InvalidCredentials` → 401 Unauthorized
/// - `InvalidPermissions` / `StationNotAssigned` → 403 Forbidden
/// - `PasswordHash` / `Signing` → 500 Internal Server Error
///
/// Rejections are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "MissingToken",
                "Authentication is required",
            ),
            Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                "InvalidToken",
                "The provided token is invalid",
            ),
            Self::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                "ExpiredToken",
                "The session has expired, please log in again",
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "InvalidCredentials",
                "Invalid email or password",
            ),
            Self::InvalidPermissions { .. } => (
                StatusCode::FORBIDDEN,
                "InvalidPermissions",
                "You do not have permission to access this resource",
            ),
            Self::StationNotAssigned(_) => (
                StatusCode::FORBIDDEN,
                "StationNotAssigned",
                "Your account is not assigned to a station",
            ),
            Self::PasswordHash(_) | Self::Signing(_) => {
                return InternalServerError(self).into_response()
            }
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto::new(code, message))).into_response()
    }
}
