// ABOUTME: Server binary for the unit converter web application
// ABOUTME: Loads configuration, initializes logging and serves the converter pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unit Converter Server Binary
//!
//! Configuration comes from the environment; command line flags override it.

use anyhow::Result;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use unit_converter_server::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};

#[derive(Parser)]
#[command(name = "unit-converter-server")]
#[command(about = "Unit converter - distance, weight and temperature conversion over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override listen address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Directory served under /files
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Load page templates from this directory instead of the embedded ones
    #[arg(long)]
    template_dir: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(http_port) = self.http_port {
            config.http_port = http_port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if self.template_dir.is_some() {
            config.template_dir = self.template_dir;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);

    logging::init_from_env()?;

    info!("Starting unit converter");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    info!("Page templates loaded");

    display_available_endpoints(&resources.config);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = config.host;
    let port = config.http_port;

    info!("=== Available Endpoints ===");
    info!("Converter:");
    info!("   Distance form:     GET  http://{host}:{port}/");
    info!("   Category form:     GET  http://{host}:{port}/{{category}}");
    info!("   Convert:           POST http://{host}:{port}/{{category}}");
    info!("Static files:         GET  http://{host}:{port}/files/{{path}}");
    info!("Health:");
    info!("   Liveness:          GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
