//! JSON extractor backed by declarative rule tables.

use crate::errors::AppError;
use crate::validation::{run_rules, ValidateRules, ValidationErrors};
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON extractor with rule-table validation.
///
/// Parses the body to raw JSON first, runs the DTO's [`ValidateRules`]
/// table against it and only then deserializes into `T`. When any rule
/// fails the handler never runs; the client gets a 400 with every
/// failure listed in rule order.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
///
/// async fn create_product(
///     ValidatedJson(payload): ValidatedJson<CreateProduct>,
/// ) -> impl IntoResponse {
///     // payload passed every rule in CreateProduct::rules()
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateRules,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Rejections go through AppError so the body keeps the uniform
        // { "error": ... } shape instead of axum's plain-text default
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        let errors = run_rules(T::rules(), &body);
        if !errors.is_empty() {
            return Err(ValidationErrors { errors }.into_response());
        }

        // The rules vouch for shape, but deserialization stays fallible
        let data = serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(e.to_string()).into_response())?;

        Ok(ValidatedJson(data))
    }
}
