use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("business name must not be empty")]
    EmptyName,

    #[error("booking already exists: {0}")]
    DuplicateBooking(String),

    #[error("booking not found: {0}")]
    BookingNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<SiteError> for AppError {
    fn from(err: SiteError) -> Self {
        let status = match &err {
            SiteError::EmptyName => StatusCode::BAD_REQUEST,
            SiteError::DuplicateBooking(_) => StatusCode::CONFLICT,
            SiteError::BookingNotFound(_) => StatusCode::NOT_FOUND,
            SiteError::Io(_) | SiteError::Json(_) | SiteError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
