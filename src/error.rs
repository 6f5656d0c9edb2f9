use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use foodplan_shopping::ShoppingListError;
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    CatalogError(#[from] CatalogError),

    #[error(transparent)]
    ShoppingListError(#[from] ShoppingListError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ShoppingListError(ShoppingListError::NoIngredients) => {
                StatusCode::BAD_REQUEST
            }
            AppError::CatalogError(CatalogError::UnknownStore(_)) => StatusCode::BAD_REQUEST,
            AppError::CatalogError(CatalogError::NoData | CatalogError::NoDeals) => {
                StatusCode::NOT_FOUND
            }
            AppError::CatalogError(CatalogError::Io { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client; internal details only go to the logs
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.to_owned(),
            AppError::CatalogError(CatalogError::Io { path, source }) => {
                tracing::error!(path = %path.display(), err = %source, "Catalog error");
                "Internal server error while fetching deals.".to_owned()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = self.public_message();

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
