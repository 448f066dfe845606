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

//! Configuration management for the item server.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file:
//!
//! | Variable       | Required | Default   |
//! |----------------|----------|-----------|
//! | `MONGODB_URL`  | yes      |           |
//! | `MONGODB_NAME` | yes      |           |
//! | `SERVER_HOST`  | no       | `0.0.0.0` |
//! | `SERVER_PORT`  | no       | `8000`    |
//! | `LOG_LEVEL`    | no       | `info`    |
//! | `LOG_DIR`      | no       |           |
//!
//! A missing required variable is a [`ConfigError`] and the server refuses
//! to start.
//!
//! # Examples
//!
//! ```
//! use item_server::config::ServerConfig;
//!
//! let config = ServerConfig::from_lookup(|name| match name {
//!     "MONGODB_URL" => Some("mongodb://localhost:27017".to_string()),
//!     "MONGODB_NAME" => Some("items".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.bind_address(), "0.0.0.0:8000");
//! ```

pub mod loader;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use loader::{load_env_file, ConfigError};
pub use logging::{init_logging, LoggingError};
pub use types::{redact_credentials, ServerConfig, DEFAULT_LOG_LEVEL};
