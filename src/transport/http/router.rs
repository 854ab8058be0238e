use crate::domain::product::Product;
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{
    AppState, ErrorResponse, HealthResponse, ProductCreate, ProductListResponse, ProductResponse,
    TotalBalanceResponse,
};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Management API",
        version = "1.0.0",
        description = "An API providing CRUD operations for products"
    ),
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::total_balance_handler,
        products::create_product_handler,
        products::get_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        Product,
        ProductCreate,
        ProductResponse,
        ProductListResponse,
        TotalBalanceResponse,
        HealthResponse,
        ErrorResponse
    )),
    tags(
        (name = "products", description = "Product management")
    )
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route("/products/total-balance", get(products::total_balance_handler))
        .route(
            "/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .fallback(not_found_handler)
        .with_state(app_state)
}

async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_string(),
            details: None,
        }),
    )
}
