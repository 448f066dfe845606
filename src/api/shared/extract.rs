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

//! Request extractors that report bad input as validation errors.
//!
//! Axum's stock `Path` and `Json` extractors answer with 400/415 and a plain
//! text body. Item endpoints answer every malformed request with a 422 and an
//! [`ErrorResponse`](super::error::ErrorResponse) instead, so these wrappers
//! translate the rejections into [`ApiError`].
//!
//! Handlers must take [`ItemIdPath`] before [`ItemJson`]: axum runs
//! extractors in argument order, which makes id validation happen first.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use log::debug;

use super::error::ApiError;
use crate::models::item::ITEM_ID_FIELD;
use crate::models::{ItemId, ItemValidationError};

/// Item id taken from the `:id` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ItemIdPath(pub ItemId);

#[async_trait]
impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ItemValidationError::single(ITEM_ID_FIELD, "path", rejection.body_text())
            })?;
        Ok(Self(raw.parse::<ItemId>()?))
    }
}

/// JSON request body; any rejection becomes a `body` validation error.
#[derive(Debug, Clone)]
pub struct ItemJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ItemJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                Err(ItemValidationError::single(
                    "body",
                    rejection_code(&rejection),
                    rejection_message(&rejection),
                )
                .into())
            }
        }
    }
}

/// Client-facing text for a rejected body. Data errors name internal types,
/// so they get a fixed message.
fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(_) => {
            "request body does not match the expected shape".to_string()
        }
        other => other.body_text(),
    }
}

fn rejection_code(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "content_type",
        JsonRejection::JsonSyntaxError(_) => "json_syntax",
        JsonRejection::JsonDataError(_) => "json_data",
        _ => "body",
    }
}
