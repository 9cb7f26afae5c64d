use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence.
///
/// Every mutation on an existing row fetches first and reports
/// `ProductError::NotFound` before touching anything, so handlers never
/// have to disambiguate "missing" from "failed".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return it with its assigned id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List all products ordered by ascending id
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Replace name, price and availability of an existing product
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Negate the availability flag of an existing product
    async fn toggle_availability(&self, id: i32) -> ProductResult<Product>;

    /// Remove a product and return its last known state
    async fn delete(&self, id: i32) -> ProductResult<Product>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    next_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing).
///
/// Ids are handed out by a monotonic counter and never reused, matching
/// the behavior of the PostgreSQL sequence.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let now = chrono::Utc::now();
        let product = Product {
            id: store.next_id,
            name: input.name.trim().to_string(),
            price: input.price,
            availability: input.availability.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        // BTreeMap iteration order is ascending by key
        Ok(store.products.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        product.name = input.name.trim().to_string();
        product.price = input.price;
        product.availability = input.availability;
        product.updated_at = chrono::Utc::now();
        let updated = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        product.availability = !product.availability;
        product.updated_at = chrono::Utc::now();
        let updated = product.clone();

        tracing::info!(
            product_id = id,
            availability = updated.availability,
            "Toggled product availability"
        );
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let removed = store
            .products
            .remove(&id)
            .ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            availability: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(create_input("Monitor", 300.0)).await.unwrap();
        assert_eq!(product.id, 1);
        assert!(product.availability);

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(create_input("Mouse", 25.0)).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(create_input("Keyboard", 75.0)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let result = repo
            .update(
                99,
                UpdateProduct {
                    name: "Ghost".to_string(),
                    price: 1.0,
                    availability: false,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_toggle_availability_flips_flag() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(create_input("Webcam", 60.0)).await.unwrap();

        let toggled = repo.toggle_availability(product.id).await.unwrap();
        assert!(!toggled.availability);

        let toggled_back = repo.toggle_availability(product.id).await.unwrap();
        assert!(toggled_back.availability);
    }

    #[tokio::test]
    async fn test_delete_returns_last_state() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(create_input("Headset", 120.0)).await.unwrap();

        let removed = repo.delete(product.id).await.unwrap();
        assert_eq!(removed, product);

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_ascending_id() {
        let repo = InMemoryProductRepository::new();
        repo.create(create_input("A", 1.0)).await.unwrap();
        repo.create(create_input("B", 2.0)).await.unwrap();
        repo.create(create_input("C", 3.0)).await.unwrap();

        let products = repo.list().await.unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
