use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product operations.
///
/// The catalog has no business rules beyond field validation, which the
/// extractors already enforce, so the service is a thin seam between
/// handlers and the repository.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List all products ordered by ascending id
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Replace a product's name, price and availability
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        self.repository.update(id, input).await
    }

    /// Negate a product's availability flag
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        self.repository.toggle_availability(id).await
    }

    /// Remove a product, returning its last known state
    pub async fn delete_product(&self, id: i32) -> ProductResult<Product> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn sample_product(id: i32) -> Product {
        Product {
            id,
            name: "Monitor".to_string(),
            price: 300.0,
            availability: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(1))
            .returning(|id| Ok(Some(sample_product(id))));

        let service = ProductService::new(mock_repo);
        let product = service.get_product(1).await.unwrap();

        assert_eq!(product.id, 1);
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(42).await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_create_product_passes_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().returning(|input| {
            Ok(Product {
                id: 1,
                name: input.name,
                price: input.price,
                availability: input.availability.unwrap_or(true),
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            })
        });

        let service = ProductService::new(mock_repo);
        let product = service
            .create_product(CreateProduct {
                name: "Webcam".to_string(),
                price: 60.0,
                availability: None,
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Webcam");
        assert!(product.availability);
    }

    #[tokio::test]
    async fn test_delete_propagates_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .returning(|id| Err(ProductError::NotFound(id)));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(7).await;

        assert!(matches!(result, Err(ProductError::NotFound(7))));
    }
}
