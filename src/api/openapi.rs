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

//! OpenAPI documentation for the item API.
//!
//! The document is available at `/openapi.json` and the Swagger UI is served at
//! `/docs/`.

use utoipa::OpenApi;

use crate::api::shared::{DeleteResponse, ErrorResponse, HealthResponse};
use crate::models::{CreateItem, FieldViolation, Item, UpdateItem};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health_check,
        super::handlers::create_item,
        super::handlers::list_items,
        super::handlers::get_item,
        super::handlers::update_item,
        super::handlers::delete_item,
    ),
    components(
        schemas(
            Item,
            CreateItem,
            UpdateItem,
            DeleteResponse,
            HealthResponse,
            ErrorResponse,
            FieldViolation,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Items", description = "Item management"),
    ),
    info(
        title = "Item Server API",
        version = "1.0.0",
        description = "CRUD API for items stored in MongoDB.\n\n## Errors\n\nEvery error response carries a `code` and a `message`. Validation errors (422) also list each violated field constraint under `details`. A malformed item id is always reported as 422, never 404.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDoc;
