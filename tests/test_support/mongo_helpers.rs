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

//! MongoDB container helpers for store integration tests.

use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

const MONGO_PORT: u16 = 27017;

/// A throwaway MongoDB instance running in Docker.
pub struct MongoGuard {
    container: ContainerAsync<Mongo>,
    url: String,
}

impl MongoGuard {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Stop the container explicitly instead of waiting for drop.
    pub async fn cleanup(self) {
        let _ = self.container.stop().await;
    }
}

/// Start a MongoDB container and return its connection URL.
pub async fn setup_mongo() -> MongoGuard {
    let container = Mongo::default()
        .start()
        .await
        .expect("Failed to start MongoDB container");
    let host = container
        .get_host()
        .await
        .expect("Failed to resolve container host");
    let port = container
        .get_host_port_ipv4(MONGO_PORT)
        .await
        .expect("Failed to resolve MongoDB port");

    MongoGuard {
        container,
        url: format!("mongodb://{host}:{port}"),
    }
}
