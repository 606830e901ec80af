use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::CurrentUser,
    error::ApiError,
    products::dto::{Pagination, ProductIn, ProductOut},
    products::repo::Product,
    state::AppState,
};

/// Read operations stay open to anonymous callers.
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

/// Mutating operations require a bearer token.
pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", put(update_product).delete(delete_product))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<ProductOut>>, ApiError> {
    let products = Product::list(&state.db, p.skip, p.limit).await?;
    Ok(Json(products.into_iter().map(ProductOut::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductOut>, ApiError> {
    let product = Product::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    Ok(Json(ProductOut::from(product)))
}

#[instrument(skip(state, user, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ProductIn>,
) -> Result<(StatusCode, Json<ProductOut>), ApiError> {
    payload.validate()?;
    let product = Product::create(
        &state.db,
        &payload.name,
        payload.description.as_deref(),
        payload.price,
        payload.stock_quantity,
        payload.image_url.as_deref(),
    )
    .await?;
    info!(product_id = %product.id, user_id = %user.id, "product created");
    Ok((StatusCode::CREATED, Json(ProductOut::from(product))))
}

#[instrument(skip(state, user, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ProductIn>,
) -> Result<Json<ProductOut>, ApiError> {
    payload.validate()?;
    let product = Product::replace(
        &state.db,
        id,
        &payload.name,
        payload.description.as_deref(),
        payload.price,
        payload.stock_quantity,
        payload.image_url.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound("Product"))?;
    info!(product_id = %id, user_id = %user.id, "product replaced");
    Ok(Json(ProductOut::from(product)))
}

#[instrument(skip(state, user))]
pub async fn delete_product(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let product = Product::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    Product::delete(&state.db, product.id).await?;
    info!(product_id = %id, user_id = %user.id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
