//! Payload validation for product create/update requests.
//!
//! Validation runs against the raw JSON body rather than a typed struct so
//! that every field-level problem (wrong type, out of range, missing) can be
//! collected and reported together in a single response instead of failing
//! at the first deserialization error.

use crate::domain::product::ProductFields;
use serde_json::Value as JsonValue;

/// How much of the payload must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// All of `name`, `price`, `quantity` are required and checked.
    Full,
    /// Only fields present in the payload are checked (PATCH-style).
    Partial,
}

/// Checks `body` against the product field rules and returns every violated
/// rule as a human-readable message. An empty vector means the payload is
/// valid (for the given mode).
pub fn validate_payload(body: &JsonValue, mode: ValidationMode) -> Vec<String> {
    let mut errors = Vec::new();
    let partial = mode == ValidationMode::Partial;

    if !partial || body.get("name").is_some() {
        let ok = matches!(body.get("name").and_then(JsonValue::as_str),
            Some(s) if !s.trim().is_empty());
        if !ok {
            errors.push("name must be a non-empty string".to_string());
        }
    }

    if !partial || body.get("price").is_some() {
        let ok = matches!(body.get("price").and_then(JsonValue::as_f64),
            Some(p) if p.is_finite() && p >= 0.0);
        if !ok {
            errors.push("price must be a number >= 0".to_string());
        }
    }

    if !partial || body.get("quantity").is_some() {
        // Integral floats like 3.0 count as integers; negative, fractional,
        // and non-numeric values do not.
        let ok = matches!(body.get("quantity").and_then(JsonValue::as_f64),
            Some(q) if q.is_finite() && q >= 0.0 && q.fract() == 0.0);
        if !ok {
            errors.push("quantity must be an integer >= 0".to_string());
        }
    }

    errors
}

/// Fully validates `body` and extracts the product fields, trimming `name`.
pub fn parse_fields(body: &JsonValue) -> Result<ProductFields, Vec<String>> {
    let errors = validate_payload(body, ValidationMode::Full);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ProductFields {
        name: body
            .get("name")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .trim()
            .to_string(),
        price: body.get("price").and_then(JsonValue::as_f64).unwrap_or_default(),
        quantity: body
            .get("quantity")
            .and_then(JsonValue::as_f64)
            .unwrap_or_default() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_payload_has_no_errors() {
        let errors = validate_payload(
            &json!({"name": "Widget", "price": 9.99, "quantity": 3}),
            ValidationMode::Full,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_name_is_reported() {
        let errors = validate_payload(
            &json!({"name": "", "price": 1, "quantity": 1}),
            ValidationMode::Full,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("name"));
    }

    #[test]
    fn whitespace_only_name_is_reported() {
        let errors = validate_payload(
            &json!({"name": "   ", "price": 1, "quantity": 1}),
            ValidationMode::Full,
        );
        assert!(errors.iter().any(|e| e.contains("name")));
    }

    #[test]
    fn negative_price_is_reported() {
        let errors = validate_payload(
            &json!({"name": "x", "price": -1, "quantity": 1}),
            ValidationMode::Full,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("price"));
    }

    #[test]
    fn multiple_violations_are_collected_together() {
        let errors = validate_payload(
            &json!({"name": "", "price": -1, "quantity": 1}),
            ValidationMode::Full,
        );
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("name")));
        assert!(errors.iter().any(|e| e.contains("price")));
    }

    #[test]
    fn missing_fields_fail_full_validation() {
        let errors = validate_payload(&json!({}), ValidationMode::Full);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let errors = validate_payload(
            &json!({"name": "x", "price": 1, "quantity": 2.5}),
            ValidationMode::Full,
        );
        assert!(errors.iter().any(|e| e.contains("quantity")));
    }

    #[test]
    fn integral_float_quantity_is_accepted() {
        let body = json!({"name": "x", "price": 1, "quantity": 3.0});
        assert!(validate_payload(&body, ValidationMode::Full).is_empty());
        let fields = parse_fields(&body).unwrap();
        assert_eq!(fields.quantity, 3);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let errors = validate_payload(
            &json!({"name": "x", "price": 1, "quantity": -3}),
            ValidationMode::Full,
        );
        assert!(errors.iter().any(|e| e.contains("quantity")));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let errors = validate_payload(
            &json!({"name": "x", "price": "9.99", "quantity": 1}),
            ValidationMode::Full,
        );
        assert!(errors.iter().any(|e| e.contains("price")));
    }

    #[test]
    fn partial_mode_only_checks_present_fields() {
        let errors = validate_payload(&json!({"price": 2.5}), ValidationMode::Partial);
        assert!(errors.is_empty());

        let errors = validate_payload(&json!({"price": -2.5}), ValidationMode::Partial);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("price"));
    }

    #[test]
    fn partial_mode_with_empty_payload_is_valid() {
        assert!(validate_payload(&json!({}), ValidationMode::Partial).is_empty());
    }

    #[test]
    fn parse_fields_trims_name() {
        let fields =
            parse_fields(&json!({"name": "  Widget  ", "price": 9.99, "quantity": 3})).unwrap();
        assert_eq!(fields.name, "Widget");
        assert_eq!(fields.price, 9.99);
        assert_eq!(fields.quantity, 3);
    }

    #[test]
    fn parse_fields_returns_all_errors() {
        let errors = parse_fields(&json!({"name": "", "price": -1, "quantity": -1})).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn zero_price_and_quantity_are_valid() {
        let errors = validate_payload(
            &json!({"name": "x", "price": 0, "quantity": 0}),
            ValidationMode::Full,
        );
        assert!(errors.is_empty());
    }
}
