//! Authentication models: token claims and the authenticated caller.

use serde::{Deserialize, Serialize};

use crate::model::user::Role;

/// JWT claims issued on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Station the user belongs to, if any.
    pub station: Option<String>,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Caller that passed the auth guard.
///
/// `role` comes from the session row rather than the token, so demoting a
/// user and invalidating their sessions takes effect immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub station_id: Option<String>,
    pub token: String,
}
