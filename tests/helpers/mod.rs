// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process axum request helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
