//! CRUD handlers for the products collection.

use crate::domain::validate::parse_fields;
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{
    AppState, ErrorResponse, ProductCreate, ProductListResponse, ProductResponse,
    TotalBalanceResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

/// Parses a path id; anything that is not a positive integer is a 400.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId),
    }
}

/// Unwraps the JSON body extractor, reporting unparseable bodies the same
/// way as field-level validation failures.
fn require_body(body: Result<Json<JsonValue>, JsonRejection>) -> Result<JsonValue, ApiError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(e) => Err(ApiError::Validation(vec![format!("invalid JSON body: {}", e)])),
    }
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "A list of products", body = ProductListResponse)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(ProductListResponse { data: store.list() })
}

#[utoipa::path(
    get,
    path = "/products/total-balance",
    tag = "products",
    responses(
        (status = 200, description = "Total inventory value as the sum of price * quantity across all products", body = TotalBalanceResponse)
    )
)]
pub async fn total_balance_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(TotalBalanceResponse {
        total_balance: store.total_balance(),
    })
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductCreate,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = require_body(body)?;
    let fields = parse_fields(&body).map_err(ApiError::Validation)?;

    let mut store = state.store.write().await;
    let created = store.create(fields);
    Ok((StatusCode::CREATED, Json(ProductResponse { data: created })))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 200, description = "A single product", body = ProductResponse),
        (status = 400, description = "Invalid id parameter", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let store = state.store.read().await;
    let found = store.get(id).ok_or(ApiError::NotFound)?;
    Ok(Json(ProductResponse { data: found }))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = u64, Path, description = "Product id")),
    request_body = ProductCreate,
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 400, description = "Invalid payload or id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let body = require_body(body)?;
    let fields = parse_fields(&body).map_err(ApiError::Validation)?;

    let mut store = state.store.write().await;
    let updated = store.update(id, fields).ok_or(ApiError::NotFound)?;
    Ok(Json(ProductResponse { data: updated }))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = u64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid id parameter", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let mut store = state.store.write().await;
    if !store.delete(id) {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
