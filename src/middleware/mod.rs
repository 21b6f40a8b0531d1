// ABOUTME: HTTP middleware for request tracing and request id propagation
// ABOUTME: Provides request ID generation and span creation for structured logging

/// Request tracing spans and request id layers
pub mod tracing;

pub use self::tracing::{create_request_span, with_request_tracing, REQUEST_ID_HEADER};
