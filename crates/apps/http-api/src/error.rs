use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use category_feature::CategoryFeatureError;
use domain::ErrorKind;
use product_feature::ProductFeatureError;

/// A failed request. Clients only ever see the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError(ErrorKind);

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        self.0
    }

    pub fn status(&self) -> StatusCode {
        match self.0 {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ErrorKind> for ApiError {
    fn from(kind: ErrorKind) -> Self {
        ApiError(kind)
    }
}

impl From<CategoryFeatureError> for ApiError {
    fn from(err: CategoryFeatureError) -> Self {
        ApiError(err.kind())
    }
}

impl From<ProductFeatureError> for ApiError {
    fn from(err: ProductFeatureError) -> Self {
        ApiError(err.kind())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
