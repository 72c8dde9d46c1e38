use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_mine::{GetMyProductsParams, GetMyProductsUseCase};

pub struct GetMyProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMyProductsUseCase for GetMyProductsUseCaseImpl {
    async fn execute(&self, params: GetMyProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching products of user: {}", params.user_id));

        let products = self
            .repository
            .get_by_user_id(&params.user_id)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to fetch products of user {}: {e}",
                    params.user_id
                ));
                ProductError::Repository(e)
            })?;

        self.logger.debug(&format!(
            "Found {} products for user {}",
            products.len(),
            params.user_id
        ));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockLog, MockProductRepo, make_product, mock_logger, owner,
    };
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_query_by_caller_identity() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_user_id()
            .withf(|user_id| user_id.as_str() == "owner-uid")
            .times(1)
            .returning(|_| Ok(vec![make_product("p-1", owner())]));

        let use_case = GetMyProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetMyProductsParams { user_id: owner() })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert!(products[0].is_owned_by(&owner()));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_user_has_no_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_user_id().returning(|_| Ok(vec![]));

        let use_case = GetMyProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetMyProductsParams { user_id: owner() })
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_log_product_count_at_debug() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_user_id().returning(|_| Ok(vec![]));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_debug()
            .withf(|message| message.contains("Found 0 products for user owner-uid"))
            .times(1)
            .returning(|_| ());

        let use_case = GetMyProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        use_case
            .execute(GetMyProductsParams { user_id: owner() })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_surface_database_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_user_id()
            .returning(|_| Err(RepositoryError::database_error("relation missing")));

        let use_case = GetMyProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetMyProductsParams { user_id: owner() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
