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

//! Item data model and request validation.
//!
//! Every shape an item takes on its way through the server lives here:
//!
//! - [`CreateItem`] / [`UpdateItem`] - request bodies as they arrive on the wire
//! - [`NewItem`] / [`ItemPatch`] - validated inputs handed to the store
//! - [`Item`] - a persisted item, as returned to clients
//! - [`ItemId`] - the store-assigned identifier
//!
//! Field constraints are enforced when converting a request body into its
//! validated form, so a store never sees an input that breaks them.

pub mod item;
pub mod validation;

pub use item::{CreateItem, InvalidItemId, Item, ItemId, ItemPatch, NewItem, UpdateItem};
pub use validation::{FieldViolation, ItemValidationError};
