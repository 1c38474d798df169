// ABOUTME: Server binary for the Fit Hall gym backend
// ABOUTME: Loads configuration, initializes logging and storage, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! # Fit Hall API Server Binary
//!
//! Starts the gym backend: document storage, logging, and the HTTP API.

use anyhow::Result;
use clap::Parser;
use fithall::{
    config::environment::ServerConfig,
    context::ServerResources,
    database_plugins::{factory::Database, StorageProvider},
    logging, server,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "fithall-server")]
#[command(about = "Fit Hall API - Gym backend with rule-based workout recommendations")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Fit Hall API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Storage initialized: {}", database.backend_info());

    if config.database.auto_migrate {
        database.migrate().await?;
        info!("Storage migrations applied");
    }

    let resources = Arc::new(ServerResources::new(database, config));
    server::serve(resources).await
}
