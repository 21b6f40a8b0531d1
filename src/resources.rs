// ABOUTME: Shared, read-only server resources handed to every route handler
// ABOUTME: Bundles the injected page renderer with the loaded server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server resources
//!
//! Built once before the listener starts and shared behind an `Arc`. Nothing
//! in here is mutated after construction, so handlers read it without locks.

use crate::config::ServerConfig;
use crate::templates::{HtmlTemplates, PageRenderer};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Everything a handler needs besides the request itself
#[derive(Clone)]
pub struct ServerResources {
    /// Page rendering capability
    pub renderer: Arc<dyn PageRenderer>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources from an already constructed renderer
    #[must_use]
    pub fn new(renderer: Arc<dyn PageRenderer>, config: Arc<ServerConfig>) -> Self {
        Self { renderer, config }
    }

    /// Load templates as configured (directory or embedded) and build resources
    ///
    /// # Errors
    ///
    /// Returns an error if the templates cannot be loaded
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let templates = match &config.template_dir {
            Some(dir) => HtmlTemplates::from_dir(dir)
                .with_context(|| format!("Failed to load templates from {}", dir.display()))?,
            None => HtmlTemplates::embedded().context("Embedded templates are invalid")?,
        };

        Ok(Self::new(Arc::new(templates), Arc::new(config)))
    }
}

impl std::fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerResources")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
