//! Data-driven request validation.
//!
//! Validation is expressed as tables of [`FieldRule`]s rather than code
//! inside handlers. Each rule names a field, a predicate over the raw
//! JSON value and the message to report when the predicate fails. The
//! [`run_rules`] evaluator walks a table in declaration order and
//! accumulates every failure, so a client sees all of its mistakes in
//! one 400 response instead of the first one only.
//!
//! Predicates run against `serde_json::Value` before deserialization.
//! This is what lets a type mismatch ("Name must be a string") show up
//! as an ordinary field error next to an emptiness check, rather than
//! aborting the whole request at the parse step.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// One failed check, reported to the client.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    /// Name of the offending field
    pub field: &'static str,
    /// What was wrong with it
    pub message: &'static str,
}

/// Response body for validation failures.
///
/// ```json
/// { "errors": [{ "field": "name", "message": "Name is empty" }] }
/// ```
#[derive(Serialize, Debug, ToSchema)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// A predicate over the raw JSON value of a field.
///
/// Receives `None` when the field is absent from the request.
pub type Check = fn(Option<&Value>) -> bool;

/// A single declarative validation rule over a body field.
pub struct FieldRule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// DTOs that carry a rule table for their request body.
pub trait ValidateRules {
    fn rules() -> &'static [FieldRule];
}

/// Evaluate a rule table against a parsed JSON object.
///
/// Rules fire in declaration order and every failure is collected.
pub fn run_rules(rules: &[FieldRule], body: &Value) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|rule| !(rule.check)(body.get(rule.field)))
        .map(|rule| FieldError {
            field: rule.field,
            message: rule.message,
        })
        .collect()
}

/// Reusable predicates for rule tables.
pub mod checks {
    use serde_json::Value;

    /// Present, non-null, and for strings non-empty after trimming.
    pub fn not_empty(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// Absent values pass; the emptiness check owns presence.
    pub fn is_string(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(v) => v.is_string(),
        }
    }

    /// A number strictly greater than zero.
    pub fn is_positive_number(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(v) => v.as_f64().is_some_and(|n| n > 0.0),
        }
    }

    pub fn is_boolean(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(v) => v.is_boolean(),
        }
    }
}
