use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ListParamsDto},
        user::{CreateUserDto, Role, UpdateUserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, query::list_query::ListQuery,
        service::user::UserService, state::AppState, util::parse::parse_id,
    },
};

const STATION_MANAGERS: &[Role] = &[Role::SuperAdmin, Role::StationAdmin];

fn user_not_found(id: &str) -> AppError {
    AppError::not_found("UserNotFound", format!("User '{}' was not found", id))
}

/// List users across every station.
///
/// Supports the `filter`, `sort`, `page`, `pageSize` and `relation` query
/// parameters. `relation=stations` embeds each user's station under
/// `StationsEmbedded` and drops users without one.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `200 OK` - One page of users with its paginator
/// - `400 Bad Request` - Malformed filter, unknown field or unknown relation
/// - `401 Unauthorized` / `403 Forbidden` - Authentication or role failure
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin])
        .await?;

    let query = ListQuery::from_params(params);
    let users = UserService::new(&state.db, &state.cache, &state.events)
        .list(&query)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List the users of the caller's station.
///
/// The caller's station is AND-ed onto the client filter.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
///
/// # Returns
/// - `200 OK` - One page of users with its paginator
/// - `403 Forbidden` - The caller has no station (`StationNotAssigned`)
pub async fn get_station_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthGuard::new(&state.db, &state.signer, &headers)
        .require(STATION_MANAGERS)
        .await?;

    let query = ListQuery::from_params(params);
    let users = UserService::new(&state.db, &state.cache, &state.events)
        .list_for_station(&query, &session)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get the authenticated user's own record.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
///
/// # Returns
/// - `200 OK` - The caller's user record
/// - `404 Not Found` - The user was deleted after logging in
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthGuard::new(&state.db, &state.signer, &headers)
        .require(STATION_MANAGERS)
        .await?;

    let user = UserService::new(&state.db, &state.cache, &state.events)
        .get(&session.user_id)
        .await?
        .ok_or_else(|| user_not_found(&session.user_id))?;

    Ok((StatusCode::OK, Json(DataDto::new(user))))
}

/// Get a user by id.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - `id` is not a valid identifier (`InvalidObjectId`)
/// - `404 Not Found` - No such user (`UserNotFound`)
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(STATION_MANAGERS)
        .await?;

    let id = parse_id(&id)?;
    let user = UserService::new(&state.db, &state.cache, &state.events)
        .get(&id)
        .await?
        .ok_or_else(|| user_not_found(&id))?;

    Ok((StatusCode::OK, Json(DataDto::new(user))))
}

/// Create a user.
///
/// Station admins cannot create super admins. A user a station admin creates
/// without a station joins the admin's station.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
///
/// # Returns
/// - `201 Created` - The created user
/// - `403 Forbidden` - A station admin tried to create a super admin
/// - `409 Conflict` - The email is already registered (`DuplicateKey`)
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthGuard::new(&state.db, &state.signer, &headers)
        .require(STATION_MANAGERS)
        .await?;

    let user = UserService::new(&state.db, &state.cache, &state.events)
        .create(payload, &session)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(user))))
}

/// Apply a partial update to a user.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid identifier
/// - `404 Not Found` - No such user
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(STATION_MANAGERS)
        .await?;

    let id = parse_id(&id)?;
    let user = UserService::new(&state.db, &state.cache, &state.events)
        .update(&id, payload)
        .await?
        .ok_or_else(|| user_not_found(&id))?;

    Ok((StatusCode::OK, Json(DataDto::new(user))))
}

/// Delete a user.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `404 Not Found` - No such user
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(STATION_MANAGERS)
        .await?;

    let id = parse_id(&id)?;
    let deleted = UserService::new(&state.db, &state.cache, &state.events)
        .delete(&id)
        .await?;

    if !deleted {
        return Err(user_not_found(&id));
    }

    Ok(StatusCode::NO_CONTENT)
}
