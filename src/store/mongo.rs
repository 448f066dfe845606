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

//! MongoDB-backed item store.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use super::{ItemStore, StoreError};
use crate::models::{Item, ItemId, ItemPatch, NewItem};

/// Collection holding item documents.
pub const ITEMS_COLLECTION: &str = "items_collection";

/// Item as laid out in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    description: String,
    price: f64,
    tax: f64,
}

impl ItemDocument {
    fn new(id: ObjectId, fields: NewItem) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            tax: fields.tax,
        }
    }
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Item {
            id: ItemId::from(doc.id),
            name: doc.name,
            description: doc.description,
            price: doc.price,
            tax: doc.tax,
        }
    }
}

/// Build the `$set` document for a patch. Only present fields are included.
fn set_document(patch: &ItemPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.as_str());
    }
    if let Some(price) = patch.price {
        set.insert("price", price);
    }
    if let Some(tax) = patch.tax {
        set.insert("tax", tax);
    }
    set
}

fn id_filter(id: ItemId) -> Document {
    doc! { "_id": id.as_object_id() }
}

pub struct MongoItemStore {
    client: Client,
    database: Database,
    items: Collection<ItemDocument>,
}

impl MongoItemStore {
    /// Create a client for `url` bound to the `database_name` database.
    ///
    /// The driver connects lazily; use [`ItemStore::ping`] to confirm the
    /// server is actually reachable.
    pub async fn connect(url: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(StoreError::Connection)?;
        let database = client.database(database_name);
        let items = database.collection::<ItemDocument>(ITEMS_COLLECTION);

        info!("Using MongoDB database '{database_name}', collection '{ITEMS_COLLECTION}'");

        Ok(Self {
            client,
            database,
            items,
        })
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

#[async_trait]
impl ItemStore for MongoItemStore {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let document = ItemDocument::new(ObjectId::new(), item);
        self.items
            .insert_one(&document)
            .await
            .map_err(StoreError::operation("insert"))?;
        debug!("Inserted item document {}", document.id);
        Ok(document.into())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let found = self
            .items
            .find_one(id_filter(id))
            .await
            .map_err(StoreError::operation("find"))?;
        Ok(found.map(Item::from))
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let cursor = self
            .items
            .find(doc! {})
            .await
            .map_err(StoreError::operation("find"))?;
        let documents: Vec<ItemDocument> = cursor
            .try_collect()
            .await
            .map_err(StoreError::operation("find"))?;
        Ok(documents.into_iter().map(Item::from).collect())
    }

    async fn update_by_id(&self, id: ItemId, patch: ItemPatch) -> Result<Option<Item>, StoreError> {
        // MongoDB rejects an empty $set
        if patch.is_empty() {
            return self.get_by_id(id).await;
        }

        let updated = self
            .items
            .find_one_and_update(id_filter(id), doc! { "$set": set_document(&patch) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(StoreError::operation("update"))?;
        Ok(updated.map(Item::from))
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let deleted = self
            .items
            .find_one_and_delete(id_filter(id))
            .await
            .map_err(StoreError::operation("delete"))?;
        Ok(deleted.map(Item::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::operation("ping"))?;
        Ok(())
    }

    async fn close(&self) {
        info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
    }
}
