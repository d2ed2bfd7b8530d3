use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ListParamsDto},
        payment_method::{CreatePaymentMethodDto, UpdatePaymentMethodDto},
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, query::list_query::ListQuery,
        service::payment_method::PaymentMethodService, state::AppState, util::parse::parse_id,
    },
};

/// Every payment-method endpoint is limited to administrators.
const ALLOWED: &[Role] = &[Role::SuperAdmin, Role::StationAdmin];

fn payment_method_not_found(id: &str) -> AppError {
    AppError::not_found(
        "PaymentMethodNotFound",
        format!("Payment method '{}' was not found", id),
    )
}

pub async fn get_payment_methods(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(ALLOWED)
        .await?;

    let query = ListQuery::from_params(params);
    let methods = PaymentMethodService::new(&state.db, &state.cache, &state.events)
        .list(&query)
        .await?;

    Ok((StatusCode::OK, Json(methods)))
}

pub async fn get_payment_method_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(ALLOWED)
        .await?;

    let id = parse_id(&id)?;
    let method = PaymentMethodService::new(&state.db, &state.cache, &state.events)
        .get(&id)
        .await?
        .ok_or_else(|| payment_method_not_found(&id))?;

    Ok((StatusCode::OK, Json(DataDto::new(method))))
}

/// Create a payment method.
///
/// # Returns
/// - `201 Created` - The created payment method
/// - `409 Conflict` - The key is already taken
pub async fn create_payment_method(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentMethodDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(ALLOWED)
        .await?;

    let method = PaymentMethodService::new(&state.db, &state.cache, &state.events)
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(method))))
}

pub async fn update_payment_method(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePaymentMethodDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(ALLOWED)
        .await?;

    let id = parse_id(&id)?;
    let method = PaymentMethodService::new(&state.db, &state.cache, &state.events)
        .update(&id, payload)
        .await?
        .ok_or_else(|| payment_method_not_found(&id))?;

    Ok((StatusCode::OK, Json(DataDto::new(method))))
}

pub async fn delete_payment_method(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(ALLOWED)
        .await?;

    let id = parse_id(&id)?;
    if !PaymentMethodService::new(&state.db, &state.cache, &state.events)
        .delete(&id)
        .await?
    {
        return Err(payment_method_not_found(&id));
    }

    Ok(StatusCode::NO_CONTENT)
}
