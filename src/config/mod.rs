// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes the environment-driven ServerConfig used by the server binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the unit converter server
//!
//! Configuration is read from environment variables only; the binary layers
//! command line overrides on top.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
