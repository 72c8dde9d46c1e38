use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let product = Product::new(NewProductProps {
            user_id: params.user_id,
            title: params.title,
            description: params.description,
            image_url: params.image_url,
        })
        .inspect_err(|e| self.logger.warn(&format!("Rejected product creation: {e}")))?;

        self.logger.info(&format!(
            "Creating product '{}' for user {}",
            product.title, product.user_id
        ));

        let created = self.repository.create(&product).await.map_err(|e| {
            self.logger.error(&format!("Failed to create product: {e}"));
            ProductError::Repository(e)
        })?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, mock_logger, owner};
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::FieldInput;

    fn params(title: FieldInput, description: FieldInput, image_url: FieldInput) -> CreateProductParams {
        CreateProductParams {
            user_id: owner(),
            title,
            description,
            image_url,
        }
    }

    #[tokio::test]
    async fn should_create_product_owned_by_caller() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .withf(|p| p.user_id.as_str() == "owner-uid" && p.title == "T")
            .times(1)
            .returning(|p| Ok(p.clone()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params("T".into(), "D".into(), "http://x/y.png".into()))
            .await
            .unwrap();

        assert_eq!(product.title, "T");
        assert_eq!(product.description, "D");
        assert_eq!(product.image_url, "http://x/y.png");
        assert_eq!(product.user_id, owner());
    }

    #[tokio::test]
    async fn should_reject_blank_description_without_saving() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("T".into(), "   ".into(), "/img.png".into()))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::RequiredFieldsMissing
        ));
    }

    #[tokio::test]
    async fn should_reject_missing_fields() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(FieldInput::Absent, FieldInput::Absent, FieldInput::Absent))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::RequiredFieldsMissing
        ));
    }

    #[tokio::test]
    async fn should_surface_database_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::database_error("unique violation")));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("T".into(), "D".into(), "/img.png".into()))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
