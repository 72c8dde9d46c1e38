use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::{ProductChanges, ProductId};
use crate::domain::shared::value_objects::UserId;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_user_id(&self, user_id: &UserId) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn update(&self, id: &ProductId, changes: &ProductChanges) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn owner() -> UserId {
    UserId::new("owner-uid")
}

pub fn stranger() -> UserId {
    UserId::new("stranger-uid")
}

pub fn make_product(id: &str, owner: UserId) -> Product {
    let now = Utc::now();
    Product::from_repository(
        ProductId::new(id),
        owner,
        "Walnut side table".to_string(),
        "Solid walnut, oiled finish".to_string(),
        "https://cdn.example.com/table.png".to_string(),
        now,
        now,
    )
}
