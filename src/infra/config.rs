//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;

/// Address the API server binds to.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

/// Path of the product snapshot file: `<DATA_DIR>/products.json`.
///
/// The service runs with zero configuration; `DATA_DIR` defaults to `data`
/// relative to the working directory.
pub fn data_file() -> PathBuf {
    let dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    PathBuf::from(dir).join("products.json")
}
