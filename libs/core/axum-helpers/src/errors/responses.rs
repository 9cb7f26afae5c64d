//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use crate::validation::ValidationErrors;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "Internal Server Error"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "errors": [
            { "field": "name", "message": "Name is empty" },
            { "field": "price", "message": "Price must be a positive number" }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrors);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid ID",
    content_type = "application/json",
    example = json!({
        "errors": [
            { "field": "id", "message": "ID not valid" }
        ]
    })
)]
pub struct BadRequestIdResponse(pub ValidationErrors);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Product not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
