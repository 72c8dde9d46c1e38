#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.id_required")]
    IdRequired,
    #[error("product.required_fields_missing")]
    RequiredFieldsMissing,
    #[error("product.invalid_title")]
    InvalidTitle,
    #[error("product.invalid_description")]
    InvalidDescription,
    #[error("product.invalid_image_url")]
    InvalidImageUrl,
    #[error("product.no_fields_to_update")]
    NoFieldsToUpdate,
    #[error("product.not_found")]
    NotFound,
    #[error("product.not_owner")]
    NotOwner,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Lifts a repository error, turning a missing row into `NotFound`.
    pub fn from_lookup(err: crate::domain::errors::RepositoryError) -> Self {
        match err {
            crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
