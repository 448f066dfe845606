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

//! Configuration loading from environment variables and `.env` files.

use std::path::{Path, PathBuf};

use super::types::{ServerConfig, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT};

pub const MONGODB_URL_VAR: &str = "MONGODB_URL";
pub const MONGODB_NAME_VAR: &str = "MONGODB_NAME";
pub const SERVER_HOST_VAR: &str = "SERVER_HOST";
pub const SERVER_PORT_VAR: &str = "SERVER_PORT";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "LOG_DIR";

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("Invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        variable: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Load variables from an env file into the process environment.
///
/// With an explicit `path` the file must exist. Without one, a `.env` in the
/// current directory or its parents is loaded when present. Variables already
/// set in the environment are never overridden.
///
/// Returns the path of the file that was loaded, if any.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e.into()),
        },
    }
}

impl ServerConfig {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the configuration through `lookup`, which maps a variable name
    /// to its value. Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mongodb_url = get(MONGODB_URL_VAR).ok_or(ConfigError::MissingVariable(MONGODB_URL_VAR))?;
        let mongodb_name =
            get(MONGODB_NAME_VAR).ok_or(ConfigError::MissingVariable(MONGODB_NAME_VAR))?;

        let port = match get(SERVER_PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    variable: SERVER_PORT_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let config = Self {
            mongodb_url,
            mongodb_name,
            host: get(SERVER_HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: get(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: get(LOG_DIR_VAR).map(|dir| PathBuf::from(dir.trim())),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URL", "mongodb://localhost:27017"),
            ("MONGODB_NAME", "items"),
        ]))
        .expect("valid config");

        assert_eq!(config.mongodb_url, "mongodb://localhost:27017");
        assert_eq!(config.mongodb_name, "items");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URL", "mongodb://db:27017"),
            ("MONGODB_NAME", "shop"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9090"),
            ("LOG_LEVEL", "debug"),
        ]))
        .expect("valid config");

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_log_dir_is_read() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URL", "mongodb://db:27017"),
            ("MONGODB_NAME", "shop"),
            ("LOG_DIR", " /var/log/item-server "),
        ]))
        .expect("valid config");

        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/item-server")));
    }

    #[test]
    fn test_empty_log_dir_disables_file_logging() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URL", "mongodb://db:27017"),
            ("MONGODB_NAME", "shop"),
            ("LOG_DIR", ""),
        ]))
        .expect("valid config");

        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_missing_url_is_fatal() {
        let result = ServerConfig::from_lookup(lookup(&[("MONGODB_NAME", "items")]));
        assert_matches!(result, Err(ConfigError::MissingVariable("MONGODB_URL")));
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let result =
            ServerConfig::from_lookup(lookup(&[("MONGODB_URL", "mongodb://localhost:27017")]));
        assert_matches!(result, Err(ConfigError::MissingVariable("MONGODB_NAME")));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let result = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URL", "mongodb://localhost:27017"),
            ("MONGODB_NAME", "   "),
        ]));
        assert_matches!(result, Err(ConfigError::MissingVariable("MONGODB_NAME")));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URL", "mongodb://localhost:27017"),
            ("MONGODB_NAME", "items"),
            ("SERVER_PORT", "eighty"),
        ]));
        assert_matches!(
            result,
            Err(ConfigError::InvalidValue { variable: "SERVER_PORT", .. })
        );
    }

    #[test]
    fn test_port_zero_fails_validation() {
        let result = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URL", "mongodb://localhost:27017"),
            ("MONGODB_NAME", "items"),
            ("SERVER_PORT", "0"),
        ]));
        assert_matches!(result, Err(ConfigError::Invalid(_)));
    }

    #[test]
    fn test_error_messages_name_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[])).expect_err("missing vars");
        assert_eq!(
            err.to_string(),
            "Required environment variable MONGODB_URL is not set"
        );
    }

    #[test]
    fn test_load_explicit_env_file_missing() {
        let dir = TempDir::new().expect("temp dir");
        let result = load_env_file(Some(&dir.path().join("missing.env")));
        assert_matches!(result, Err(ConfigError::EnvFile(_)));
    }

    #[test]
    fn test_load_explicit_env_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("test.env");
        fs::write(&path, "ITEM_SERVER_LOADER_TEST_VAR=loaded\n").expect("write env file");

        let loaded = load_env_file(Some(&path)).expect("env file loads");
        assert_eq!(loaded, Some(path));
        assert_eq!(
            std::env::var("ITEM_SERVER_LOADER_TEST_VAR").ok().as_deref(),
            Some("loaded")
        );
    }
}
