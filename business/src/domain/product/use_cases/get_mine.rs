use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

pub struct GetMyProductsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetMyProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetMyProductsParams) -> Result<Vec<Product>, ProductError>;
}
