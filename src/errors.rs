// ABOUTME: Unified error handling with error codes and HTTP status mapping
// ABOUTME: Defines AppError, ErrorCode and the plain-text fallback response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Every failure a request can hit is an [`AppError`] carrying an [`ErrorCode`].
//! Route handlers turn these into rendered error pages; the [`IntoResponse`]
//! implementation here is only the plain-text fallback used when the error
//! page itself cannot be rendered.

use crate::constants::messages;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The numeric field (or a unit selection) was left empty
    MissingInput,
    /// The numeric field did not parse as a number
    UnparseableInput,
    /// A unit key is not part of the requested category
    UnknownUnit,
    /// The path does not name a supported category
    UnknownCategory,
    /// A page template failed to load or render
    TemplateRenderFailure,
    /// Invalid server configuration
    ConfigError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::MissingInput | Self::UnparseableInput | Self::UnknownUnit => {
                StatusCode::BAD_REQUEST
            }
            Self::UnknownCategory => StatusCode::NOT_FOUND,
            Self::TemplateRenderFailure | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingInput => "A required field is missing from the request",
            Self::UnparseableInput => "The provided value is not a number",
            Self::UnknownUnit => "The selected unit is not valid for this category",
            Self::UnknownCategory => "The requested page does not exist",
            Self::TemplateRenderFailure => "The page could not be rendered",
            Self::ConfigError => "Configuration error encountered",
        }
    }

    /// Stable identifier used in log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingInput => "MISSING_INPUT",
            Self::UnparseableInput => "UNPARSEABLE_INPUT",
            Self::UnknownUnit => "UNKNOWN_UNIT",
            Self::UnknownCategory => "UNKNOWN_CATEGORY",
            Self::TemplateRenderFailure => "TEMPLATE_RENDER_FAILURE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message shown on the error page
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Empty required field
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingInput, message)
    }

    /// Field that should hold a number but does not
    pub fn unparseable_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnparseableInput, message)
    }

    /// Unit key outside the category's table
    pub fn unknown_unit(unit: &str, category: &str) -> Self {
        Self::new(
            ErrorCode::UnknownUnit,
            format!("unknown {category} unit '{unit}'"),
        )
    }

    /// Path that does not resolve to a category
    #[must_use]
    pub fn invalid_path() -> Self {
        Self::new(ErrorCode::UnknownCategory, messages::INVALID_PATH)
    }

    /// Template loading or rendering failure
    pub fn template(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::TemplateRenderFailure, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

/// Plain-text fallback, used when the HTML error page is unavailable
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(
            error.code = %self.code,
            error.message = %self.message,
            "Falling back to plain-text error response"
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            messages::ERROR_PAGE_UNAVAILABLE,
        )
            .into_response()
    }
}
