// ABOUTME: HTTP server assembly: route composition, static files and the serve loop
// ABOUTME: Binds the configured address and serves until ctrl-c or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server assembly

use crate::{
    middleware::with_request_tracing,
    resources::ServerResources,
    routes::{ConverterRoutes, HealthRoutes},
};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Build the full application router
///
/// `/files/*` is served from the configured static directory; everything else
/// the converter routes do not claim gets the invalid-path page.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let static_files = ServeDir::new(&resources.config.static_dir);

    let router = Router::new()
        .merge(HealthRoutes::routes())
        .nest_service("/files", static_files)
        .merge(ConverterRoutes::routes(resources));

    with_request_tracing(router)
}

/// Bind the configured address and serve until shutdown is requested
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = resources.config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "HTTP server listening");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for ctrl-c");
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
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received ctrl-c, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
