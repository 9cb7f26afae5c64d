use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository backed by SeaORM.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> ProductResult<entity::Model> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        // Fetch first: absence must surface as NotFound, not as a
        // zero-row update
        let model = self.find_model(id).await?;

        let mut active_model = model.into_active_model();
        active_model.name = Set(input.name.trim().to_string());
        active_model.price = Set(input.price);
        active_model.availability = Set(input.availability);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model.update(&self.db).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated.into())
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let model = self.find_model(id).await?;
        let availability = !model.availability;

        let mut active_model = model.into_active_model();
        active_model.availability = Set(availability);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model.update(&self.db).await?;

        tracing::info!(
            product_id = id,
            availability = updated.availability,
            "Toggled product availability"
        );
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<Product> {
        let model = self.find_model(id).await?;
        let removed: Product = model.clone().into();

        model.delete(&self.db).await?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(removed)
    }
}
