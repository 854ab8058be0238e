pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::product_store::ProductStore;
pub use domain::product::{Product, ProductFields};
pub use domain::validate::{parse_fields, validate_payload, ValidationMode};
pub use storage::file::FileStore;
