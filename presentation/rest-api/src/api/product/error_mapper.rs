use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// The endpoint an error came from; picks the 403 and 500 wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOperation {
    GetAll,
    GetMine,
    GetById,
    Create,
    Update,
    Delete,
}

impl ProductOperation {
    fn failure_message(self) -> &'static str {
        match self {
            ProductOperation::GetAll => "Failed to get products",
            ProductOperation::GetMine => "Failed to get user products",
            ProductOperation::GetById => "Failed to get product",
            ProductOperation::Create => "Failed to create product",
            ProductOperation::Update => "Failed to update product",
            ProductOperation::Delete => "Failed to delete product",
        }
    }

    fn forbidden_message(self) -> &'static str {
        match self {
            ProductOperation::Update => "You can only update your own products",
            ProductOperation::Delete => "You can only delete your own products",
            _ => "Forbidden",
        }
    }
}

impl IntoErrorResponse<ProductOperation> for ProductError {
    fn into_error_response(self, operation: ProductOperation) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::IdRequired => (StatusCode::BAD_REQUEST, "Product id is required"),
            ProductError::RequiredFieldsMissing => (
                StatusCode::BAD_REQUEST,
                "Title, description, and imageUrl are required",
            ),
            ProductError::InvalidTitle => (StatusCode::BAD_REQUEST, "Invalid title"),
            ProductError::InvalidDescription => (StatusCode::BAD_REQUEST, "Invalid description"),
            ProductError::InvalidImageUrl => (StatusCode::BAD_REQUEST, "Invalid imageUrl"),
            ProductError::NoFieldsToUpdate => {
                (StatusCode::BAD_REQUEST, "At least one field is required")
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            ProductError::NotOwner => (StatusCode::FORBIDDEN, operation.forbidden_message()),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                operation.failure_message(),
            ),
        };

        (status, ErrorResponse::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_hide_database_detail_behind_operation_message() {
        let err = ProductError::Repository(RepositoryError::database_error("password=hunter2"));

        let (status, json) = err.into_error_response(ProductOperation::GetMine);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.error, "Failed to get user products");
    }

    #[test]
    fn should_word_forbidden_by_operation() {
        let (status, update) = ProductError::NotOwner.into_error_response(ProductOperation::Update);
        let (_, delete) = ProductError::NotOwner.into_error_response(ProductOperation::Delete);

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(update.0.error, "You can only update your own products");
        assert_eq!(delete.0.error, "You can only delete your own products");
    }

    #[test]
    fn should_map_each_operation_failure_message() {
        let cases = [
            (ProductOperation::GetAll, "Failed to get products"),
            (ProductOperation::GetById, "Failed to get product"),
            (ProductOperation::Create, "Failed to create product"),
            (ProductOperation::Update, "Failed to update product"),
            (ProductOperation::Delete, "Failed to delete product"),
        ];

        for (operation, expected) in cases {
            let err = ProductError::Repository(RepositoryError::database_error("boom"));
            let (_, json) = err.into_error_response(operation);
            assert_eq!(json.0.error, expected);
        }
    }
}
