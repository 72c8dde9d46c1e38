use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Failure body: `{"error": "<message>"}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: error.into(),
        })
    }

    pub fn unauthorized() -> Json<Self> {
        Self::new("Unauthorized")
    }
}

/// Acknowledgement body: `{"message": "<message>"}`.
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Maps a domain error to an HTTP status and body. `C` carries whatever the
/// mapping needs to pick its messages (e.g. the operation that failed).
pub trait IntoErrorResponse<C> {
    fn into_error_response(self, context: C) -> (StatusCode, Json<ErrorResponse>);
}
