//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "0.1.0",
        description = "REST API for managing a product catalog",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::handlers::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;
