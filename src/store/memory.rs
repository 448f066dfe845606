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

//! In-process item store.
//!
//! Behaves like [`super::MongoItemStore`] (fresh ObjectIds, insertion order,
//! `None` on absence) without a database. Every instance owns its own map.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{ItemStore, StoreError};
use crate::models::{Item, ItemId, ItemPatch, NewItem};

#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<IndexMap<ItemId, Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Drop every stored item.
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let item = Item::from_new(ItemId::generate(), item);
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn update_by_id(&self, id: ItemId, patch: ItemPatch) -> Result<Option<Item>, StoreError> {
        let mut items = self.items.write().await;
        Ok(items.get_mut(&id).map(|item| {
            patch.apply_to(item);
            item.clone()
        }))
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        Ok(self.items.write().await.shift_remove(&id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
