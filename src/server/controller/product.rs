use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ListParamsDto},
        product::{CreateProductDto, UpdateProductDto},
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, query::list_query::ListQuery,
        service::product::ProductService, state::AppState, util::parse::parse_id,
    },
};

const PRODUCT_MANAGERS: &[Role] = &[Role::SuperAdmin, Role::StationAdmin];

fn product_not_found(id: &str) -> AppError {
    AppError::not_found("ProductNotFound", format!("Product '{}' was not found", id))
}

/// List products.
///
/// Products declare no relations, so any `relation` hint is rejected with
/// `UnknownRelation`.
///
/// # Access Control
/// - Any authenticated role
pub async fn get_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[])
        .await?;

    let query = ListQuery::from_params(params);
    let products = ProductService::new(&state.db, &state.cache, &state.events)
        .list(&query)
        .await?;

    Ok((StatusCode::OK, Json(products)))
}

/// Get a product by id.
///
/// # Access Control
/// - Any authenticated role
pub async fn get_product_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(&[])
        .await?;

    let id = parse_id(&id)?;
    let product = ProductService::new(&state.db, &state.cache, &state.events)
        .get(&id)
        .await?
        .ok_or_else(|| product_not_found(&id))?;

    Ok((StatusCode::OK, Json(DataDto::new(product))))
}

/// Create a product.
///
/// # Access Control
/// - `SuperAdmin`, `StationAdmin`
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(PRODUCT_MANAGERS)
        .await?;

    let product = ProductService::new(&state.db, &state.cache, &state.events)
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(product))))
}

pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(PRODUCT_MANAGERS)
        .await?;

    let id = parse_id(&id)?;
    let product = ProductService::new(&state.db, &state.cache, &state.events)
        .update(&id, payload)
        .await?
        .ok_or_else(|| product_not_found(&id))?;

    Ok((StatusCode::OK, Json(DataDto::new(product))))
}

pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.signer, &headers)
        .require(PRODUCT_MANAGERS)
        .await?;

    let id = parse_id(&id)?;
    if !ProductService::new(&state.db, &state.cache, &state.events)
        .delete(&id)
        .await?
    {
        return Err(product_not_found(&id));
    }

    Ok(StatusCode::NO_CONTENT)
}
