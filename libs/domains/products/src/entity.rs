use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "Products";
}

// Conversion from Sea-ORM Model to domain Product
impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            availability: model.availability,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain CreateProduct to Sea-ORM ActiveModel.
// The id stays NotSet so the database sequence assigns it.
impl From<crate::models::CreateProduct> for ActiveModel {
    fn from(input: crate::models::CreateProduct) -> Self {
        let now = chrono::Utc::now();

        ActiveModel {
            id: NotSet,
            name: Set(input.name.trim().to_string()),
            price: Set(input.price),
            availability: Set(input.availability.unwrap_or(true)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
