//! Integer id path parameter extractor.

use crate::validation::{FieldError, ValidationErrors};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer `id` path parameters.
///
/// Rejects non-numeric ids with a field error before any store access,
/// so `/products/abc` answers 400 rather than 404.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match id.parse::<i32>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(ValidationErrors {
                errors: vec![FieldError {
                    field: "id",
                    message: "ID not valid",
                }],
            }
            .into_response()),
        }
    }
}
