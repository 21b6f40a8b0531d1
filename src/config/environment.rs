// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management

use crate::constants::{defaults, env_keys};
use crate::errors::AppError;
use anyhow::Result;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    /// Local development
    Development,
    /// Deployed service
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP listener port
    pub http_port: u16,
    /// HTTP listener address
    pub host: IpAddr,
    /// Directory served under `/files`
    pub static_dir: PathBuf,
    /// Load templates from here instead of the embedded copies
    pub template_dir: Option<PathBuf>,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: IpAddr::from([0, 0, 0, 0]),
            static_dir: PathBuf::from(defaults::STATIC_DIR),
            template_dir: None,
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` or `HOST` is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port: u16 = match env::var(env_keys::HTTP_PORT) {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(format!("Invalid {} value: {raw}", env_keys::HTTP_PORT))
                    .with_source(e)
            })?,
            Err(_) => defaults::HTTP_PORT,
        };

        let host = env_var_or(env_keys::HOST, defaults::HOST);
        let host: IpAddr = host.trim().parse::<IpAddr>().map_err(|e| {
            AppError::config(format!("Invalid {} value: {host}", env_keys::HOST)).with_source(e)
        })?;

        let template_dir = env::var(env_keys::TEMPLATE_DIR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            http_port,
            host,
            static_dir: PathBuf::from(env_var_or(env_keys::STATIC_DIR, defaults::STATIC_DIR)),
            template_dir,
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
        })
    }

    /// Socket address the server binds to
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Unit Converter Configuration: listen={}, static_dir={}, templates={}, environment={}",
            self.socket_addr(),
            self.static_dir.display(),
            self.template_dir
                .as_ref()
                .map_or_else(|| "embedded".to_owned(), |dir| dir.display().to_string()),
            self.environment,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
