// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Holds service names, environment keys, server defaults and unit conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Unit conversion factors for the distance and weight tables
pub mod units;

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the server binary
    pub const UNIT_CONVERTER_SERVER: &str = "unit-converter-server";
}

/// Environment variable names read at startup
pub mod env_keys {
    /// HTTP listener port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listener address
    pub const HOST: &str = "HOST";
    /// Directory served under `/files`
    pub const STATIC_DIR: &str = "STATIC_DIR";
    /// Optional directory to load HTML templates from
    pub const TEMPLATE_DIR: &str = "TEMPLATE_DIR";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Server defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Default bind address (all interfaces)
    pub const HOST: &str = "0.0.0.0";
    /// Default static asset directory
    pub const STATIC_DIR: &str = "./files/static";
}

/// User-facing error messages
pub mod messages {
    /// Shown for any path that does not map to a category
    pub const INVALID_PATH: &str = "invalid path";
    /// Shown when the numeric field is left empty
    pub const ENTER_A_VALUE: &str = "please enter a value";
    /// Body written when even the error page cannot be rendered
    pub const ERROR_PAGE_UNAVAILABLE: &str = "unable to load error page";
}
