//! Identifier casing
//!
//! Deterministic PascalCase/camelCase to snake_case conversion used for
//! derived column names.

use heck::ToSnakeCase;

/// Convert a logical property name to its default snake_case column name
///
/// Already-snake_case input is returned unchanged.
pub fn to_snake_case(name: &str) -> String {
    name.to_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_conversion() {
        assert_eq!(to_snake_case("CustomerName"), "customer_name");
        assert_eq!(to_snake_case("Id"), "id");
        assert_eq!(to_snake_case("Status"), "status");
    }

    #[test]
    fn test_camel_case_conversion() {
        assert_eq!(to_snake_case("createdAt"), "created_at");
        assert_eq!(to_snake_case("orderLineItemId"), "order_line_item_id");
    }

    #[test]
    fn test_snake_case_is_identity() {
        assert_eq!(to_snake_case("customer_name"), "customer_name");
        assert_eq!(to_snake_case("id"), "id");
    }

    #[test]
    fn test_acronym_runs() {
        assert_eq!(to_snake_case("HTTPStatus"), "http_status");
        assert_eq!(to_snake_case("CustomerID"), "customer_id");
    }
}
