use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        if params.id.is_empty() {
            self.logger.warn("Rejected product lookup without id");
            return Err(ProductError::IdRequired);
        }

        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.repository.get_by_id(&params.id).await.map_err(|e| {
            let err = ProductError::from_lookup(e);
            if let ProductError::Repository(inner) = &err {
                self.logger
                    .error(&format!("Failed to fetch product {}: {inner}", params.id));
            }
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockProductRepo, make_product, mock_logger, owner,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::ProductId;

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| id.as_str() == "p-42")
            .returning(|id| Ok(make_product(id.as_str(), owner())));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new("p-42"),
            })
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new("p-42"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new("abc123"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_empty_id_without_querying() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(""),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::IdRequired));
    }

    #[tokio::test]
    async fn should_keep_database_failure_distinct_from_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::database_error("broken pipe")));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new("p-1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
