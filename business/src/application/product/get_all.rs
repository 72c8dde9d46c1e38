use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.get_all().await.map_err(|e| {
            self.logger.error(&format!("Failed to fetch products: {e}"));
            ProductError::Repository(e)
        })?;
        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockLog, MockProductRepo, make_product, mock_logger, owner, stranger,
    };
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_products_of_every_owner() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                make_product("p-1", owner()),
                make_product("p-2", stranger()),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].user_id, stranger());
    }

    #[tokio::test]
    async fn should_log_product_count_at_debug() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![make_product("p-1", owner())]));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_debug()
            .withf(|message| message.contains("Found 1 products"))
            .times(1)
            .returning(|_| ());

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        use_case.execute().await.unwrap();
    }

    #[tokio::test]
    async fn should_surface_database_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::database_error("pool timed out")));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
