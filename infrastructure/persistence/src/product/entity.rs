use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;
use business::domain::shared::value_objects::UserId;

/// Column list shared by every `SELECT`/`RETURNING` on `products`.
pub const PRODUCT_COLUMNS: &str =
    "id, user_id, title, description, image_url, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            UserId::new(self.user_id),
            self.title,
            self.description,
            self.image_url,
            self.created_at,
            self.updated_at,
        )
    }
}
