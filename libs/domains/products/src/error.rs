use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    #[error("product with id '{0}' was not found.")]
    NotFound(i32),

    #[error("product with id '{0}' is not available for purchase.")]
    NotAvailable(i32),

    #[error("product with id '{0}' is out of stock.")]
    OutOfStock(i32),

    #[error("product with id '{0}' cannot take more likes.")]
    LikeLimit(i32),

    /// Bad or missing input; the message is shown to the client verbatim.
    #[error("{0}")]
    Validation(String),

    /// Field rule failures, kept per field for the response `details`.
    #[error("{0}")]
    InvalidFields(#[from] validator::ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::NotFound(_) => AppError::NotFound(message),
            ProductError::NotAvailable(_)
            | ProductError::OutOfStock(_)
            | ProductError::LikeLimit(_) => AppError::Conflict(message),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::InvalidFields(errors) => AppError::ValidationError(errors),
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
