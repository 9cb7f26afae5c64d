//! API routes module

pub mod health;

use axum::Router;
use domain_products::{handlers, PgProductRepository, ProductService};
use sea_orm::DatabaseConnection;

/// Create all API routes
pub fn routes(db: DatabaseConnection) -> Router {
    let repository = PgProductRepository::new(db.clone());
    let service = ProductService::new(repository);

    Router::new()
        .nest("/products", handlers::router(service))
        .merge(health::router(db))
}
