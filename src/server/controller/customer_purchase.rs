use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ListParamsDto},
        customer_purchase::CreateCustomerPurchaseDto,
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, query::list_query::ListQuery,
        service::customer_purchase::CustomerPurchaseService, state::AppState,
        util::parse::parse_id,
    },
};

/// List purchases across every station.
///
/// Accepts `relation=stations` or `relation=users`. Both relations are
/// single-valued, so purchases without a matching record are left out of the
/// page while the paginator still counts them.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `200 OK` - One page of purchases with its paginator
/// - `400 Bad Request` - Malformed filter, unknown field or unknown relation
pub async fn get_customer_purchases(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin])
        .await?;

    let query = ListQuery::from_params(params);
    let purchases = CustomerPurchaseService::new(&state.db, &state.cache, &state.events)
        .list(&query)
        .await?;

    Ok((StatusCode::OK, Json(purchases)))
}

/// List purchases recorded at the caller's station.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
///
/// # Returns
/// - `200 OK` - One page of purchases with its paginator
/// - `403 Forbidden` - The caller has no station (`StationNotAssigned`)
pub async fn get_my_customer_purchases(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin, Role::StationAdmin])
        .await?;

    let query = ListQuery::from_params(params);
    let purchases = CustomerPurchaseService::new(&state.db, &state.cache, &state.events)
        .list_for_station(&query, &session)
        .await?;

    Ok((StatusCode::OK, Json(purchases)))
}

/// Get a purchase by id.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
pub async fn get_customer_purchase_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[Role::SuperAdmin, Role::StationAdmin])
        .await?;

    let id = parse_id(&id)?;
    let purchase = CustomerPurchaseService::new(&state.db, &state.cache, &state.events)
        .get(&id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                "CustomerPurchaseNotFound",
                format!("Customer purchase '{}' was not found", id),
            )
        })?;

    Ok((StatusCode::OK, Json(DataDto::new(purchase))))
}

/// Record a purchase made at the caller's station.
///
/// The purchase is attributed to the caller and their station claim.
///
/// # Access Control
/// - Any authenticated role
///
/// # Returns
/// - `201 Created` - The recorded purchase
pub async fn record_customer_purchase(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCustomerPurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[])
        .await?;

    let purchase = CustomerPurchaseService::new(&state.db, &state.cache, &state.events)
        .record(payload, &session)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(purchase))))
}
