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

//! Store doubles for failure and lifecycle tests.

use async_trait::async_trait;
use item_server::{Item, ItemId, ItemPatch, ItemStore, MemoryItemStore, NewItem, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A store whose every operation fails as if the database were down.
pub struct FailingItemStore {
    reason: String,
}

impl FailingItemStore {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl ItemStore for FailingItemStore {
    async fn create(&self, _item: NewItem) -> Result<Item, StoreError> {
        self.fail()
    }

    async fn get_by_id(&self, _id: ItemId) -> Result<Option<Item>, StoreError> {
        self.fail()
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        self.fail()
    }

    async fn update_by_id(
        &self,
        _id: ItemId,
        _patch: ItemPatch,
    ) -> Result<Option<Item>, StoreError> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: ItemId) -> Result<Option<Item>, StoreError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.fail()
    }
}

/// Wraps a [`MemoryItemStore`], counting store calls and closes.
#[derive(Default)]
pub struct CountingItemStore {
    inner: MemoryItemStore,
    calls: AtomicUsize,
    closes: Arc<AtomicUsize>,
}

impl CountingItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared close counter that outlives the store itself.
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        self.closes.clone()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemStore for CountingItemStore {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        self.record();
        self.inner.create(item).await
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.record();
        self.inner.get_by_id(id).await
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        self.record();
        self.inner.list_all().await
    }

    async fn update_by_id(&self, id: ItemId, patch: ItemPatch) -> Result<Option<Item>, StoreError> {
        self.record();
        self.inner.update_by_id(id, patch).await
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.record();
        self.inner.delete_by_id(id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
