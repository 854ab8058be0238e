//! Domain types and validation rules for products.

pub mod product;
pub mod validate;

pub use product::{Product, ProductFields};
pub use validate::{parse_fields, validate_payload, ValidationMode};
