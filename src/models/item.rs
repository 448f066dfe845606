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

use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{FieldViolation, ItemValidationError};

/// Field name used when reporting a malformed identifier.
pub const ITEM_ID_FIELD: &str = "item_id";

/// Store-assigned identifier of an item.
///
/// Wraps a MongoDB ObjectId and travels over the wire as its 24-character
/// hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(ObjectId);

impl ItemId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for ItemId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<ItemId> for ObjectId {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// A string that does not parse as an item identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid item id (expected a 24-character hex ObjectId)")]
pub struct InvalidItemId {
    pub value: String,
}

impl InvalidItemId {
    pub fn to_violation(&self) -> FieldViolation {
        FieldViolation::new(ITEM_ID_FIELD, "object_id", self.to_string())
    }
}

impl From<InvalidItemId> for ItemValidationError {
    fn from(err: InvalidItemId) -> Self {
        ItemValidationError::new(vec![err.to_violation()])
    }
}

impl FromStr for ItemId {
    type Err = InvalidItemId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self).map_err(|_| InvalidItemId {
            value: s.to_string(),
        })
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A persisted item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Identifier assigned by the store
    #[schema(value_type = String, example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: ItemId,
    /// Name of the item
    #[schema(example = "Item Name")]
    pub name: String,
    /// Description of the item
    #[schema(example = "An item")]
    pub description: String,
    /// Price, always greater than zero
    #[schema(example = 42.0)]
    pub price: f64,
    /// Tax rate
    #[schema(example = 3.2)]
    pub tax: f64,
}

impl Item {
    pub fn from_new(id: ItemId, fields: NewItem) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            tax: fields.tax,
        }
    }
}

/// Validated fields for an item that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tax: f64,
}

/// Request body for creating an item.
///
/// Fields are optional at the serde level so that a body missing several of
/// them reports every missing field at once instead of failing on the first.
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    /// Name of the item (1-100 characters)
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters")
    )]
    #[schema(value_type = String, required = true, min_length = 1, max_length = 100, example = "Item Name")]
    pub name: Option<String>,

    /// Description of the item (at most 300 characters)
    #[validate(
        required(message = "description is required"),
        length(max = 300, message = "description must be at most 300 characters")
    )]
    #[schema(value_type = String, required = true, max_length = 300, example = "An item")]
    pub description: Option<String>,

    /// Price of the item, must be greater than zero
    #[validate(
        required(message = "price is required"),
        range(exclusive_min = 0.0, message = "price must be greater than zero")
    )]
    #[schema(value_type = f64, required = true, example = 42.0)]
    pub price: Option<f64>,

    /// Tax rate
    #[validate(required(message = "tax is required"))]
    #[schema(value_type = f64, required = true, example = 3.2)]
    pub tax: Option<f64>,
}

impl CreateItem {
    /// Check every field constraint and produce the validated item fields.
    pub fn into_new_item(self) -> Result<NewItem, ItemValidationError> {
        self.validate()?;
        match (self.name, self.description, self.price, self.tax) {
            (Some(name), Some(description), Some(price), Some(tax)) => Ok(NewItem {
                name,
                description,
                price,
                tax,
            }),
            _ => Err(ItemValidationError::single(
                "body",
                "required",
                "name, description, price and tax are required",
            )),
        }
    }
}

/// Request body for a partial update.
///
/// Each field distinguishes "omitted" (`None`) from "sent as null"
/// (`Some(None)`). Omitted fields are left untouched; null is rejected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItem {
    /// New name (1-100 characters)
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, min_length = 1, max_length = 100)]
    pub name: Option<Option<String>>,

    /// New description (at most 300 characters)
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, max_length = 300)]
    pub description: Option<Option<String>>,

    /// New price, must be greater than zero
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Option<f64>>,

    /// New tax rate
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub tax: Option<Option<f64>>,
}

/// Marks a field as present, keeping an explicit null as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn non_null<T>(
    field: &str,
    value: Option<Option<T>>,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    match value {
        Some(Some(value)) => Some(value),
        Some(None) => {
            violations.push(FieldViolation::new(
                field,
                "not_null",
                format!("{field} may be omitted but must not be null"),
            ));
            None
        }
        None => None,
    }
}

impl UpdateItem {
    /// Check the supplied fields and produce the patch to apply.
    pub fn into_patch(self) -> Result<ItemPatch, ItemValidationError> {
        let mut violations = Vec::new();
        let patch = ItemPatch {
            name: non_null("name", self.name, &mut violations),
            description: non_null("description", self.description, &mut violations),
            price: non_null("price", self.price, &mut violations),
            tax: non_null("tax", self.tax, &mut violations),
        };

        if let Err(errors) = patch.validate() {
            violations.extend(ItemValidationError::from(errors).violations);
        }

        if violations.is_empty() {
            Ok(patch)
        } else {
            Err(ItemValidationError::new(violations))
        }
    }
}

/// Validated partial update: `Some` fields are written, `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ItemPatch {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 300, message = "description must be at most 300 characters"))]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: Option<f64>,
    pub tax: Option<f64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.tax.is_none()
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(tax) = self.tax {
            item.tax = tax;
        }
    }
}
