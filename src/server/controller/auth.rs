use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::DataDto, auth::LoginDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState,
    },
};

/// Exchange credentials for a bearer token.
///
/// The issued token is stored as a session so it can be revoked by logout or
/// by the pruning job.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - `TokenDto` with the token and its expiry
/// - `401 Unauthorized` - Unknown email or wrong password (`InvalidCredentials`)
/// - `500 Internal Server Error` - Database error
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthService::new(&state.db, &state.signer)
        .login(payload)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(token))))
}

/// Revoke the bearer token used for this request.
///
/// # Access Control
/// - Any authenticated role
///
/// # Returns
/// - `204 No Content` - Session deleted
/// - `401 Unauthorized` - Missing, invalid or already revoked token
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.signer)
        .logout(&session.token)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
