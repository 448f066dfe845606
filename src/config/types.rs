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

use serde::Serialize;
use std::path::PathBuf;

use super::loader::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolved settings for an item server process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// MongoDB connection string, possibly with credentials
    pub mongodb_url: String,
    /// Database holding the items collection
    pub mongodb_name: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Directory for daily-rotated log files; console only when unset
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("Invalid server port: 0".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("Server host cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Copy of this configuration that is safe to log or print.
    pub fn redacted(&self) -> Self {
        Self {
            mongodb_url: redact_credentials(&self.mongodb_url),
            ..self.clone()
        }
    }
}

/// Replace the user-info part of a connection string with `***`.
pub fn redact_credentials(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{scheme}://***@{}", &rest[at + 1..]),
        None => url.to_string(),
    }
}
