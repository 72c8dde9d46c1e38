use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::{FieldInput, ProductId};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw input for a new product. The owner always comes from the caller's
/// identity, never from the request body.
pub struct NewProductProps {
    pub user_id: UserId,
    pub title: FieldInput,
    pub description: FieldInput,
    pub image_url: FieldInput,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let (Some(title), Some(description), Some(image_url)) = (
            props.title.non_blank(),
            props.description.non_blank(),
            props.image_url.non_blank(),
        ) else {
            return Err(ProductError::RequiredFieldsMissing);
        };

        let now = Utc::now();
        Ok(Self {
            id: ProductId::generate(),
            user_id: props.user_id,
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        user_id: UserId,
        title: String,
        description: String,
        image_url: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            image_url,
            created_at,
            updated_at,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
