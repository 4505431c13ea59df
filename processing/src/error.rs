//! Error taxonomy for receipt processing and its HTTP mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a well-formed receipt was rejected, naming the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("items: a receipt must contain at least one item")]
    NoItems,

    #[error(
        "retailer: {0:?} must be non-empty and contain only letters, digits, whitespace, '-' or '&'"
    )]
    Retailer(String),

    #[error("total: {0:?} is not an amount of the form 0.00")]
    Total(String),

    #[error(
        "items[{index}].shortDescription: {value:?} must be non-empty and contain only \
         letters, digits, whitespace or '-'"
    )]
    ItemDescription { index: usize, value: String },

    #[error("items[{index}].price: {value:?} is not an amount of the form 0.00")]
    ItemPrice { index: usize, value: String },

    #[error("{field}: {value:?} exceeds the largest accepted amount of 1000000000.00")]
    AmountTooLarge { field: String, value: String },

    #[error("purchaseDate: {0:?} is not a date of the form YYYY-MM-DD")]
    PurchaseDate(String),

    #[error("purchaseTime: {0:?} is not a time of the form HH:MM")]
    PurchaseTime(String),
}

impl ValidationError {
    pub fn field(&self) -> String {
        match self {
            ValidationError::NoItems => "items".to_string(),
            ValidationError::Retailer(_) => "retailer".to_string(),
            ValidationError::Total(_) => "total".to_string(),
            ValidationError::ItemDescription { index, .. } => {
                format!("items[{index}].shortDescription")
            }
            ValidationError::ItemPrice { index, .. } => format!("items[{index}].price"),
            ValidationError::AmountTooLarge { field, .. } => field.clone(),
            ValidationError::PurchaseDate(_) => "purchaseDate".to_string(),
            ValidationError::PurchaseTime(_) => "purchaseTime".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("The receipt is invalid. Malformed request body: {0}")]
    MalformedInput(String),

    #[error("The receipt is invalid. {0}")]
    InvalidReceipt(#[from] ValidationError),

    #[error("No receipt found for that ID: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ProcessingError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ProcessingError::MalformedInput(_) => (StatusCode::BAD_REQUEST, "MALFORMED_INPUT"),
            ProcessingError::InvalidReceipt(_) => (StatusCode::BAD_REQUEST, "INVALID_RECEIPT"),
            ProcessingError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ProcessingError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
