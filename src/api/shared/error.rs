// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types and error handling utilities for the item API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{FieldViolation, InvalidItemId, ItemId, ItemValidationError};
use crate::store::StoreError;

/// Error codes for API responses
pub mod error_codes {
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INVALID_ITEM_ID: &str = "INVALID_ITEM_ID";
    pub const ITEM_NOT_FOUND: &str = "ITEM_NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Every violated field constraint, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add field violations to the error response
    pub fn with_details(mut self, details: Vec<FieldViolation>) -> Self {
        self.details = Some(details);
        self
    }

    /// Pair the response with the status code its error code maps to
    pub fn with_status(self) -> (StatusCode, axum::Json<Self>) {
        let status = status_from_code(&self.code);
        (status, axum::Json(self))
    }
}

/// Convert an error code to an HTTP status code
fn status_from_code(code: &str) -> StatusCode {
    match code {
        error_codes::ITEM_NOT_FOUND => StatusCode::NOT_FOUND,

        error_codes::VALIDATION_FAILED | error_codes::INVALID_ITEM_ID => {
            StatusCode::UNPROCESSABLE_ENTITY
        }

        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Failure of an item request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request validation failed: {0}")]
    Validation(#[from] ItemValidationError),

    #[error(transparent)]
    InvalidItemId(#[from] InvalidItemId),

    #[error("Item '{0}' not found")]
    ItemNotFound(ItemId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(validation) => ErrorResponse::new(
                error_codes::VALIDATION_FAILED,
                "Request validation failed",
            )
            .with_details(validation.violations),
            ApiError::InvalidItemId(invalid) => {
                ErrorResponse::new(error_codes::INVALID_ITEM_ID, invalid.to_string())
                    .with_details(vec![invalid.to_violation()])
            }
            ApiError::ItemNotFound(id) => {
                ErrorResponse::new(error_codes::ITEM_NOT_FOUND, format!("Item '{id}' not found"))
            }
            // Driver messages can carry hosts and credentials; keep them in the log only
            ApiError::Store(_) => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(err) = &self {
            error!("Item store failure: {err}");
        }
        ErrorResponse::from(self).with_status().into_response()
    }
}
