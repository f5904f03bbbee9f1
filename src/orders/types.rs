//! Request types for the order procedures

use serde::Deserialize;
use utoipa::ToSchema;

/// One line of a checkout cart: a product and how many of it.
///
/// The quantity is accepted as given; the store renders whatever the
/// cart said, and a zero or negative quantity is the cart's problem.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CartLine {
    pub product_id: i64,
    #[schema(example = 3)]
    pub quantity: i32,
}

/// Body of the item archival mutation
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub archived: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_line_deserializes() {
        let line: CartLine =
            serde_json::from_str(r#"{"product_id": 42, "quantity": 3}"#).expect("should parse");
        assert_eq!(line.product_id, 42);
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_cart_line_rejects_non_integer_quantity() {
        let res = serde_json::from_str::<CartLine>(r#"{"product_id": 42, "quantity": "three"}"#);
        assert!(res.is_err(), "Malformed input must be rejected at the edge");
    }

    #[test]
    fn test_cart_line_rejects_missing_field() {
        let res = serde_json::from_str::<CartLine>(r#"{"product_id": 42}"#);
        assert!(res.is_err());
    }
}
