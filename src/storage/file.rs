//! JSON snapshot file persistence for the product collection.
//!
//! The whole collection is written as a single pretty-printed JSON array and
//! fully overwritten on every save. Persistence is best-effort: any failure
//! to create the data directory, read, parse, or write is logged and
//! swallowed, and the in-memory collection remains the source of truth.

use crate::domain::product::Product;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Mirrors the store's state to a snapshot file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the containing directory if missing. Returns false if that
    /// fails, in which case the current operation falls back to memory only.
    fn ensure_data_dir(&self) -> bool {
        let Some(dir) = self.path.parent() else {
            return true;
        };
        if dir.as_os_str().is_empty() || dir.is_dir() {
            return true;
        }
        match fs::create_dir_all(dir) {
            Ok(()) => true,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "could not ensure data directory");
                false
            }
        }
    }

    /// Reads the snapshot, returning an empty collection if the file is
    /// absent, unreadable, or does not parse to a product array.
    pub fn load(&self) -> Vec<Product> {
        self.ensure_data_dir();
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e,
                    "failed to load products from file, using memory only");
                return Vec::new();
            }
        };
        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e,
                    "snapshot did not parse to an array, using memory only");
                return Vec::new();
            }
        };
        // One unreadable record must not wipe the rest of the collection.
        let mut products = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Product>(record) {
                Ok(product) => products.push(product),
                Err(e) => {
                    warn!(path = %self.path.display(), index, error = %e,
                        "skipping unreadable snapshot record");
                }
            }
        }
        products
    }

    /// Overwrites the snapshot with the full collection (best-effort).
    pub fn save(&self, products: &[Product]) {
        if !self.ensure_data_dir() {
            return;
        }
        let json = match serde_json::to_string_pretty(products) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize products");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e,
                "failed to persist products to file (continuing with memory)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use tempfile::tempdir;

    fn widget(id: u64) -> Product {
        Product {
            id,
            name: format!("Widget {}", id),
            price: 9.99,
            quantity: 3u64.into(),
        }
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("products.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_garbage_returns_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(FileStore::new(path).load().is_empty());
    }

    #[test]
    fn load_non_array_json_returns_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, r#"{"id": 1}"#).unwrap();
        assert!(FileStore::new(path).load().is_empty());
    }

    #[test]
    fn load_keeps_records_with_malformed_quantity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "name": "ok", "price": 10.0, "quantity": 2},
                {"id": 2, "name": "negative", "price": 1.0, "quantity": -1},
                {"id": 3, "name": "fractional", "price": 1.0, "quantity": 2.5}
            ]"#,
        )
        .unwrap();

        let store = FileStore::new(&path);
        let loaded = store.load();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].quantity, serde_json::Number::from(-1i64));

        // Saving and reloading does not rewrite the malformed values.
        store.save(&loaded);
        assert_eq!(store.load(), loaded);
    }

    #[test]
    fn load_skips_unreadable_records_without_dropping_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "name": "ok", "price": 10.0, "quantity": 2},
                {"id": "not-an-id"},
                {"id": 3, "name": "also ok", "price": 1.0, "quantity": 1}
            ]"#,
        )
        .unwrap();

        let loaded = FileStore::new(&path).load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 1);
        assert_eq!(loaded[1].id, 3);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("products.json"));
        let products = vec![widget(1), widget(2)];
        store.save(&products);
        assert_eq!(store.load(), products);
    }

    #[test]
    fn save_creates_missing_data_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("products.json");
        let store = FileStore::new(&path);
        store.save(&[widget(1)]);
        assert!(path.exists());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("products.json"));
        store.save(&[widget(1), widget(2)]);
        store.save(&[widget(3)]);
        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 3);
    }

    #[test]
    fn snapshot_is_pretty_printed_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");
        FileStore::new(&path).save(&[widget(1)]);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains('\n'));
    }
}
