use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Product;
use super::value_objects::{ProductChanges, ProductId};

/// Storage port for products. Missing rows surface as `RepositoryError::NotFound`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_user_id(&self, user_id: &UserId) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
}
