//! Rule tables for product request bodies.
//!
//! Rules fire in declaration order; a request that breaks several rules
//! gets every message back at once.

use axum_helpers::validation::{checks, FieldRule, ValidateRules};

use crate::models::{CreateProduct, UpdateProduct};

pub const CREATE_PRODUCT_RULES: &[FieldRule] = &[
    FieldRule::new("name", checks::not_empty, "Name is empty"),
    FieldRule::new("name", checks::is_string, "Name must be a string"),
    FieldRule::new("price", checks::not_empty, "Price is empty"),
    FieldRule::new(
        "price",
        checks::is_positive_number,
        "Price must be a positive number",
    ),
];

pub const UPDATE_PRODUCT_RULES: &[FieldRule] = &[
    FieldRule::new("name", checks::not_empty, "Name is empty"),
    FieldRule::new("name", checks::is_string, "Name must be a string"),
    FieldRule::new("price", checks::not_empty, "Price is empty"),
    FieldRule::new(
        "price",
        checks::is_positive_number,
        "Price must be a positive number",
    ),
    FieldRule::new("availability", checks::not_empty, "Availability is empty"),
    FieldRule::new(
        "availability",
        checks::is_boolean,
        "Availability must be a boolean",
    ),
];

impl ValidateRules for CreateProduct {
    fn rules() -> &'static [FieldRule] {
        CREATE_PRODUCT_RULES
    }
}

impl ValidateRules for UpdateProduct {
    fn rules() -> &'static [FieldRule] {
        UPDATE_PRODUCT_RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::validation::run_rules;
    use serde_json::json;

    #[test]
    fn test_create_rules_accept_valid_payload() {
        let body = json!({ "name": "Keyboard", "price": 75 });
        assert!(run_rules(CreateProduct::rules(), &body).is_empty());
    }

    #[test]
    fn test_create_rules_collect_all_messages_in_order() {
        let errors = run_rules(CreateProduct::rules(), &json!({}));
        let messages: Vec<_> = errors.iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["Name is empty", "Price is empty"]);
    }

    #[test]
    fn test_update_rules_require_availability() {
        let body = json!({ "name": "Keyboard", "price": 75 });
        let errors = run_rules(UpdateProduct::rules(), &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "availability");
        assert_eq!(errors[0].message, "Availability is empty");
    }

    #[test]
    fn test_update_rules_reject_non_boolean_availability() {
        let body = json!({ "name": "Keyboard", "price": 75, "availability": "yes" });
        let errors = run_rules(UpdateProduct::rules(), &body);
        assert_eq!(errors[0].message, "Availability must be a boolean");
    }
}
