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

use anyhow::Result;
use axum::Router;
use log::{info, warn};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::config::ServerConfig;
use crate::store::{MongoItemStore, SharedItemStore};

pub struct ItemServer {
    host: String,
    port: u16,
    store: SharedItemStore,
}

impl ItemServer {
    /// Open the MongoDB connection described by `config`.
    ///
    /// An unreachable database is logged but does not stop startup; requests
    /// fail with a server error until it comes back.
    pub async fn new(config: &ServerConfig) -> Result<Self> {
        config.validate()?;

        let redacted = config.redacted();
        info!(
            "Connecting to MongoDB at {} (database '{}')",
            redacted.mongodb_url, config.mongodb_name
        );
        let store = MongoItemStore::connect(&config.mongodb_url, &config.mongodb_name).await?;

        let store: SharedItemStore = Arc::new(store);
        match store.ping().await {
            Ok(()) => info!("MongoDB is reachable"),
            Err(e) => warn!("MongoDB is not reachable yet: {e}"),
        }

        Ok(Self::from_store(store, config.host.clone(), config.port))
    }

    /// Create a server around an already opened store.
    pub fn from_store(store: SharedItemStore, host: String, port: u16) -> Self {
        Self { host, port, store }
    }

    /// The complete application: item routes, API docs and CORS.
    pub fn app(&self) -> Router {
        build_app(self.store.clone())
    }

    /// Serve until Ctrl-C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr).await?;
        info!("Starting item API on {addr}");
        info!("Swagger UI available at http://{addr}/docs/");

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `shutdown` completes, then drain in-flight
    /// requests and close the store.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.app();
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        info!("Shutting down item server");
        self.store.close().await;
        served?;
        Ok(())
    }
}

/// Build the application router around `store`.
pub fn build_app(store: SharedItemStore) -> Router {
    api::build_router(store)
        .merge(api::build_docs_router())
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
