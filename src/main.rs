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

// Allow println! in main.rs for CLI user-facing output (validate, check commands)
#![allow(clippy::print_stdout)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;

use item_server::config::{init_logging, DEFAULT_LOG_LEVEL};
use item_server::{load_env_file, ItemServer, ItemStore, MongoItemStore, ServerConfig};

#[derive(Parser)]
#[command(name = "item-server")]
#[command(about = "REST service for managing items stored in MongoDB")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nrustc: ",
    env!("ITEM_SERVER_RUSTC_VERSION"),
    "\nmongodb driver: ",
    env!("ITEM_SERVER_MONGODB_DRIVER_VERSION"),
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to an env file to load before reading the environment (defaults to ./.env if present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Override the bind host (SERVER_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Override the server port (SERVER_PORT)
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run,

    /// Validate the configuration without connecting to MongoDB
    Validate,

    /// Connect to MongoDB and check that it answers
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_file = load_env_file(cli.env_file.as_deref());
    let config = ServerConfig::from_env();

    // Configuration errors are reported after logging is up, on the console only
    let (level, log_dir) = match &config {
        Ok(c) => (c.log_level.clone(), c.log_dir.clone()),
        Err(_) => (DEFAULT_LOG_LEVEL.to_string(), None),
    };
    init_logging(&level, log_dir.as_deref())?;

    if let Some(path) = env_file.context("Failed to load environment file")? {
        info!("Loaded environment variables from {}", path.display());
    }

    let mut config = config.context("Invalid configuration")?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    config.validate()?;
    debug!("Server configuration: {:?}", config.redacted());

    match cli.command {
        Some(Commands::Run) | None => run_server(config).await,
        Some(Commands::Validate) => validate_config(&config),
        Some(Commands::Check) => check_database(&config).await,
    }
}

/// Run the item server until it is asked to stop
async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Starting item server");
    info!("Port: {}", config.port);

    let server = ItemServer::new(&config).await?;
    server.run().await
}

fn validate_config(config: &ServerConfig) -> Result<()> {
    let redacted = config.redacted();
    println!("Configuration is valid");
    println!("  MongoDB URL:  {}", redacted.mongodb_url);
    println!("  MongoDB name: {}", redacted.mongodb_name);
    println!("  Bind address: {}", redacted.bind_address());
    println!("  Log level:    {}", redacted.log_level);
    match &redacted.log_dir {
        Some(dir) => println!("  Log files:    {}", dir.display()),
        None => println!("  Log files:    disabled"),
    }
    Ok(())
}

async fn check_database(config: &ServerConfig) -> Result<()> {
    let store = MongoItemStore::connect(&config.mongodb_url, &config.mongodb_name).await?;
    let result = store.ping().await;
    store.close().await;

    result.with_context(|| {
        format!(
            "MongoDB at {} did not answer",
            config.redacted().mongodb_url
        )
    })?;
    println!(
        "MongoDB at {} is reachable (database '{}')",
        config.redacted().mongodb_url,
        store.database_name()
    );
    Ok(())
}
