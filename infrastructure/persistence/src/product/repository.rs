use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductChanges, ProductId};
use business::domain::shared::value_objects::UserId;

use super::entity::{PRODUCT_COLUMNS, ProductEntity};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_user_id(&self, user_id: &UserId) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"INSERT INTO products (id, user_id, title, description, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(product.id.as_str())
        .bind(product.user_id.as_str())
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        // NULL parameters keep the stored column.
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"UPDATE products SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                updated_at = now()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(id.as_str())
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.image_url.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
