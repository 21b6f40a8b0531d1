// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, configuration, resource and router helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `unit_converter_server`

use axum::Router;
use std::fs;
use std::sync::{Arc, Once};
use tempfile::TempDir;
use unit_converter_server::{
    config::{Environment, ServerConfig},
    resources::ServerResources,
    server::build_router,
    templates::{HtmlTemplates, PageRenderer, ResultPage, TemplateError},
    units::UnitCategory,
};

static INIT_LOGGER: Once = Once::new();

/// Stylesheet written into every test static directory
pub const TEST_STYLESHEET: &str = "body { color: #333; }\n";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Static directory containing `style.css`
pub fn create_static_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("style.css"), TEST_STYLESHEET).expect("Failed to write stylesheet");
    dir
}

/// Configuration pointing at `static_dir`
pub fn test_config(static_dir: &TempDir) -> ServerConfig {
    ServerConfig {
        static_dir: static_dir.path().to_path_buf(),
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Resources with the embedded templates
pub fn create_test_resources(static_dir: &TempDir) -> Arc<ServerResources> {
    init_test_logging();
    let templates = HtmlTemplates::embedded().expect("Embedded templates must load");
    Arc::new(ServerResources::new(
        Arc::new(templates),
        Arc::new(test_config(static_dir)),
    ))
}

/// Full application router; keep the `TempDir` alive for the test's duration
pub fn create_test_router() -> (Router, TempDir) {
    let static_dir = create_static_dir();
    let router = build_router(create_test_resources(&static_dir));
    (router, static_dir)
}

/// Renderer whose pages always fail
pub struct FailingRenderer;

impl FailingRenderer {
    fn fail() -> TemplateError {
        TemplateError::Unterminated {
            template: "broken.html",
        }
    }
}

impl PageRenderer for FailingRenderer {
    fn render_form(&self, _category: UnitCategory) -> Result<String, TemplateError> {
        Err(Self::fail())
    }

    fn render_result(&self, _page: &ResultPage<'_>) -> Result<String, TemplateError> {
        Err(Self::fail())
    }

    fn render_error(&self, _message: &str) -> Result<String, TemplateError> {
        Err(Self::fail())
    }
}

/// Renderer whose form and result pages fail but whose error page works
pub struct BrokenPagesRenderer(pub HtmlTemplates);

impl PageRenderer for BrokenPagesRenderer {
    fn render_form(&self, _category: UnitCategory) -> Result<String, TemplateError> {
        Err(FailingRenderer::fail())
    }

    fn render_result(&self, _page: &ResultPage<'_>) -> Result<String, TemplateError> {
        Err(FailingRenderer::fail())
    }

    fn render_error(&self, message: &str) -> Result<String, TemplateError> {
        self.0.render_error(message)
    }
}

/// Router built around a custom renderer
pub fn create_router_with_renderer(renderer: Arc<dyn PageRenderer>) -> (Router, TempDir) {
    init_test_logging();
    let static_dir = create_static_dir();
    let resources = Arc::new(ServerResources::new(
        renderer,
        Arc::new(test_config(&static_dir)),
    ));
    (build_router(resources), static_dir)
}
