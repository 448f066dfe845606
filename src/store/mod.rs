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

//! Item persistence.
//!
//! The [`ItemStore`] trait is the only way handlers reach stored items.
//! Two implementations exist:
//!
//! - [`MongoItemStore`] - the production store, backed by a MongoDB collection
//! - [`MemoryItemStore`] - an in-process store for tests and local experiments
//!
//! Absence is always reported as `Ok(None)`. `Err` is reserved for failures
//! talking to the database itself.

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{Item, ItemId, ItemPatch, NewItem};

pub mod memory;
pub mod mongo;

pub use memory::MemoryItemStore;
pub use mongo::{MongoItemStore, ITEMS_COLLECTION};

/// Store handle shared by every request handler.
pub type SharedItemStore = Arc<dyn ItemStore>;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to connect to MongoDB: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("MongoDB {operation} failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn operation(operation: &'static str) -> impl FnOnce(mongodb::error::Error) -> Self {
        move |source| StoreError::Operation { operation, source }
    }
}

/// CRUD access to persisted items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item under a freshly assigned id.
    async fn create(&self, item: NewItem) -> Result<Item, StoreError>;

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Every stored item, in the backend's natural order.
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Write the fields present in `patch`, leaving the rest untouched.
    ///
    /// An empty patch returns the current item unchanged.
    async fn update_by_id(&self, id: ItemId, patch: ItemPatch) -> Result<Option<Item>, StoreError>;

    /// Remove an item, returning it if it existed.
    async fn delete_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release backend resources. Called once at shutdown.
    async fn close(&self) {}
}
