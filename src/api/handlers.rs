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

//! Item API handler functions with OpenAPI documentation.

use axum::{extract::Extension, http::StatusCode, response::Json};
use log::{debug, warn};

use crate::api::shared::{
    ApiError, DeleteResponse, ErrorResponse, HealthResponse, ItemIdPath, ItemJson,
};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::store::SharedItemStore;

/// Check server and database health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server and database are healthy", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check(
    Extension(store): Extension<SharedItemStore>,
) -> (StatusCode, Json<HealthResponse>) {
    let (status, health, database) = match store.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "up"),
        Err(e) => {
            warn!("Health check could not reach the item store: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: health.to_string(),
            database: database.to_string(),
            timestamp: chrono::Utc::now(),
        }),
    )
}

/// Create a new item
///
/// Example request body:
/// ```json
/// {
///   "name": "Item Name",
///   "description": "An item",
///   "price": 42.0,
///   "tax": 3.2
/// }
/// ```
#[utoipa::path(
    post,
    path = "/items/",
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 422, description = "Invalid item", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn create_item(
    Extension(store): Extension<SharedItemStore>,
    ItemJson(request): ItemJson<CreateItem>,
) -> Result<Json<Item>, ApiError> {
    let fields = request.into_new_item()?;
    let item = store.create(fields).await?;
    debug!("Created item '{}'", item.id);
    Ok(Json(item))
}

/// List all items
#[utoipa::path(
    get,
    path = "/items/",
    responses(
        (status = 200, description = "Every stored item", body = Vec<Item>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn list_items(
    Extension(store): Extension<SharedItemStore>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = store.list_all().await?;
    debug!("Listing {} item(s)", items.len());
    Ok(Json(items))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item id (24-character hex ObjectId)")
    ),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed item id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn get_item(
    Extension(store): Extension<SharedItemStore>,
    ItemIdPath(id): ItemIdPath,
) -> Result<Json<Item>, ApiError> {
    match store.get_by_id(id).await? {
        Some(item) => Ok(Json(item)),
        None => {
            debug!("Item '{id}' not found");
            Err(ApiError::ItemNotFound(id))
        }
    }
}

/// Partially update an item
///
/// Only the fields present in the body are written. Fields may be omitted
/// but not set to null.
///
/// Example request body:
/// ```json
/// {
///   "price": 52.0
/// }
/// ```
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item id (24-character hex ObjectId)")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed item id or invalid fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn update_item(
    Extension(store): Extension<SharedItemStore>,
    ItemIdPath(id): ItemIdPath,
    ItemJson(request): ItemJson<UpdateItem>,
) -> Result<Json<Item>, ApiError> {
    let patch = request.into_patch()?;
    match store.update_by_id(id, patch).await? {
        Some(item) => {
            debug!("Updated item '{id}'");
            Ok(Json(item))
        }
        None => {
            debug!("Item '{id}' not found for update");
            Err(ApiError::ItemNotFound(id))
        }
    }
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item id (24-character hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed item id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn delete_item(
    Extension(store): Extension<SharedItemStore>,
    ItemIdPath(id): ItemIdPath,
) -> Result<Json<DeleteResponse>, ApiError> {
    match store.delete_by_id(id).await? {
        Some(_) => {
            debug!("Deleted item '{id}'");
            Ok(Json(DeleteResponse::deleted()))
        }
        None => {
            debug!("Item '{id}' not found for delete");
            Err(ApiError::ItemNotFound(id))
        }
    }
}
