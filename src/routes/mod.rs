// ABOUTME: Route module organization for the unit converter HTTP endpoints
// ABOUTME: Provides route definitions for the converter pages and health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the unit converter
//!
//! Each module contains route definitions and thin handlers; conversion and
//! rendering live in [`crate::converter`] and [`crate::templates`].

/// Category form and conversion routes
pub mod converter;
/// Health check and system status routes
pub mod health;

/// Converter page route handlers
pub use converter::{ConversionForm, ConverterRoutes};
/// Health check route handlers
pub use health::HealthRoutes;
