use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductChanges;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    fn log_failure(&self, err: &ProductError, params: &UpdateProductParams) {
        if let ProductError::Repository(inner) = err {
            self.logger
                .error(&format!("Failed to update product {}: {inner}", params.id));
        }
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let changes =
            ProductChanges::from_inputs(&params.title, &params.description, &params.image_url)
                .inspect_err(|e| {
                    self.logger
                        .warn(&format!("Rejected update of product {}: {e}", params.id))
                })?;

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(ProductError::from_lookup)
            .inspect_err(|e| self.log_failure(e, &params))?;

        if !existing.is_owned_by(&params.user_id) {
            self.logger.warn(&format!(
                "User {} tried to update product {} owned by {}",
                params.user_id, existing.id, existing.user_id
            ));
            return Err(ProductError::NotOwner);
        }

        let updated = self
            .repository
            .update(&params.id, &changes)
            .await
            .map_err(ProductError::from_lookup)
            .inspect_err(|e| self.log_failure(e, &params))?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
