use crate::app::product_store::ProductStore;
use crate::domain::product::Product;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// Shared state handed to every handler.
///
/// Mutating handlers hold the write lock across validate-mutate-persist, so
/// no request ever observes a half-applied mutation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ProductStore>>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Create/replace payload, documented for OpenAPI only: handlers read the
/// raw JSON body so validation can report every field problem at once.
#[derive(Debug, ToSchema)]
pub struct ProductCreate {
    #[schema(example = "New Product")]
    pub name: String,
    #[schema(example = 9.99, minimum = 0)]
    pub price: f64,
    #[schema(example = 10, minimum = 0)]
    pub quantity: u64,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct TotalBalanceResponse {
    #[serde(rename = "totalBalance")]
    #[schema(example = 199.95)]
    pub total_balance: f64,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid payload")]
    pub error: String,
    /// Itemized validation messages, present for payload errors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}
