use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::FieldInput;
use crate::domain::shared::value_objects::UserId;

pub struct CreateProductParams {
    pub user_id: UserId,
    pub title: FieldInput,
    pub description: FieldInput,
    pub image_url: FieldInput,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
