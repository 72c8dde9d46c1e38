/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// Carries the driver detail for logs; never sent to clients.
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn database_error(detail: impl std::fmt::Display) -> Self {
        RepositoryError::DatabaseError(detail.to_string())
    }
}
