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

//! REST API implementation for the item server.
//!
//! ## API Structure
//!
//! ```text
//! /health            - Health check, including a database ping
//! /items/            - List (GET) and create (POST) items
//! /items/{id}        - Read (GET), partially update (PUT) and delete (DELETE) an item
//! /openapi.json      - OpenAPI document
//! /docs/             - Swagger UI
//! ```
//!
//! ## Module Organization
//!
//! - `shared` - Errors, extractors and non-item response types
//! - `handlers` - Endpoint implementations
//! - `routes` - Router construction
//! - `openapi` - OpenAPI document

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod shared;

pub use handlers::*;
pub use openapi::ApiDoc;
pub use routes::{build_docs_router, build_router};
pub use shared::error::*;
pub use shared::responses::*;
