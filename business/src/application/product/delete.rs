use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let log_failure = |e: &ProductError| {
            if let ProductError::Repository(inner) = e {
                self.logger
                    .error(&format!("Failed to delete product {}: {inner}", params.id));
            }
        };

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(ProductError::from_lookup)
            .inspect_err(log_failure)?;

        if !existing.is_owned_by(&params.user_id) {
            self.logger.warn(&format!(
                "User {} tried to delete product {} owned by {}",
                params.user_id, existing.id, existing.user_id
            ));
            return Err(ProductError::NotOwner);
        }

        self.repository
            .delete(&params.id)
            .await
            .map_err(ProductError::from_lookup)
            .inspect_err(log_failure)?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
