// ABOUTME: Main library entry point for the unit converter web server
// ABOUTME: Converts distance, weight and temperature values through HTML forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Unit Converter Server
//!
//! A small HTTP service that renders one form per unit category and converts
//! the submitted value into another unit of the same category.
//!
//! ## Features
//!
//! - **Three categories**: distance, weight and temperature
//! - **Server-rendered pages**: form, result and error templates with shared header and footer
//! - **Static files**: served from a configurable directory under `/files/`
//! - **Structured logging**: request spans with propagated request ids
//!
//! ## Architecture
//!
//! - **Units**: unit tables and per-category conversion rules
//! - **Converter**: pure conversion of one submitted value
//! - **Templates**: the [`templates::PageRenderer`] seam and its HTML implementation
//! - **Routes**: thin axum handlers that parse forms and pick a page
//! - **Server**: router assembly, static files and graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use unit_converter_server::config::environment::ServerConfig;
//! use unit_converter_server::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     unit_converter_server::server::run(resources).await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Service names, environment keys, defaults and conversion factors
pub mod constants;

/// Value conversion between units of one category
pub mod converter;

/// Unified error handling with HTTP status mapping
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Request tracing middleware
pub mod middleware;

/// Shared read-only state handed to route handlers
pub mod resources;

/// `HTTP` route definitions
pub mod routes;

/// Router assembly and the serve loop
pub mod server;

/// Page templates and rendering
pub mod templates;

/// Unit categories and unit tables
pub mod units;
