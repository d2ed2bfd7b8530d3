use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ListParamsDto},
        station::{CreateStationDto, UpdateStationDto},
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, query::list_query::ListQuery,
        service::station::StationService, state::AppState, util::parse::parse_id,
    },
};

fn station_not_found(id: &str) -> AppError {
    AppError::not_found("StationNotFound", format!("Station '{}' was not found", id))
}

/// List stations.
///
/// `relation=users` embeds every user of the station under `UsersEmbedded`.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `200 OK` - One page of stations with its paginator
/// - `400 Bad Request` - Malformed filter, unknown field or unknown relation
pub async fn get_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin])
        .await?;

    let query = ListQuery::from_params(params);
    let stations = StationService::new(&state.db, &state.cache, &state.events)
        .list(&query)
        .await?;

    Ok((StatusCode::OK, Json(stations)))
}

/// Get a station by id.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
pub async fn get_station_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin, Role::StationAdmin])
        .await?;

    let id = parse_id(&id)?;
    let station = StationService::new(&state.db, &state.cache, &state.events)
        .get(&id)
        .await?
        .ok_or_else(|| station_not_found(&id))?;

    Ok((StatusCode::OK, Json(DataDto::new(station))))
}

/// Create a station.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `201 Created` - The created station
/// - `409 Conflict` - The station key is already taken
pub async fn create_station(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin])
        .await?;

    let station = StationService::new(&state.db, &state.cache, &state.events)
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(station))))
}

/// Apply a partial update to a station.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
pub async fn update_station(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin, Role::StationAdmin])
        .await?;

    let id = parse_id(&id)?;
    let station = StationService::new(&state.db, &state.cache, &state.events)
        .update(&id, payload)
        .await?
        .ok_or_else(|| station_not_found(&id))?;

    Ok((StatusCode::OK, Json(DataDto::new(station))))
}

/// Delete a station.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `204 No Content` - Station deleted
/// - `404 Not Found` - No such station
pub async fn delete_station(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin])
        .await?;

    let id = parse_id(&id)?;
    if !StationService::new(&state.db, &state.cache, &state.events)
        .delete(&id)
        .await?
    {
        return Err(station_not_found(&id));
    }

    Ok(StatusCode::NO_CONTENT)
}
