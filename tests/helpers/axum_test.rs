// ABOUTME: Axum HTTP testing utilities for integration tests
// ABOUTME: Provides helpers to test Axum routes without running a full server

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde::Serialize;
use tower::ServiceExt;

/// Helper to build and execute HTTP requests against Axum routers
pub struct AxumTestRequest {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl AxumTestRequest {
    /// Create a new GET request
    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    /// Create a new POST request
    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    /// Create a request with any method
    #[allow(dead_code)]
    pub fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header to the request
    #[allow(dead_code)]
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Add a url-encoded form body to the request
    #[allow(dead_code)]
    pub fn form<T: Serialize>(mut self, data: &T) -> Self {
        self.body = Some(serde_urlencoded::to_string(data).expect("Failed to encode form"));
        self.headers.push((
            header::CONTENT_TYPE.as_str().to_owned(),
            "application/x-www-form-urlencoded".to_owned(),
        ));
        self
    }

    /// Add a raw body without touching the content type
    #[allow(dead_code)]
    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_owned());
        self
    }

    /// Execute the request against an Axum router
    pub async fn send(self, app: Router) -> AxumTestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);

        for (key, value) in self.headers {
            builder = builder.header(key, value);
        }

        let body = self.body.unwrap_or_default();
        let request = builder
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = app
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        AxumTestResponse::from_response(response).await
    }
}

/// Wrapper around Axum HTTP response for testing
pub struct AxumTestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl AxumTestResponse {
    /// Create from response by eagerly reading the body
    async fn from_response(response: axum::http::Response<Body>) -> Self {
        use axum::body::to_bytes;
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the response status code as u16 for easy assertion
    #[allow(dead_code)]
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get a response header as a string
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the `Content-Type` header
    #[allow(dead_code)]
    pub fn content_type(&self) -> &str {
        self.header(header::CONTENT_TYPE.as_str()).unwrap_or_default()
    }

    /// Get the response body as a JSON value
    #[allow(dead_code)]
    pub fn json<T: serde::de::DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to deserialize JSON response")
    }

    /// Get the response body as a string
    pub fn text(self) -> String {
        String::from_utf8(self.body).expect("Failed to decode response as UTF-8")
    }

    /// Assert that the status code matches
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {}, got {}",
            expected, self.status
        );
        self
    }

    /// Assert that the body is an HTML page
    #[allow(dead_code)]
    pub fn assert_html(self) -> Self {
        assert!(
            self.content_type().starts_with("text/html"),
            "Expected text/html, got {:?}",
            self.content_type()
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Form};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_axum_test_request_get() {
        let app = Router::new().route("/test", get(|| async { "Hello" }));
        let response = AxumTestRequest::get("/test").send(app).await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.text(), "Hello");
    }

    #[tokio::test]
    async fn test_axum_test_request_post_with_form() {
        let app = Router::new().route(
            "/test",
            axum::routing::post(|Form(body): Form<HashMap<String, String>>| async move {
                body.get("key").cloned().unwrap_or_default()
            }),
        );
        let response = AxumTestRequest::post("/test")
            .form(&[("key", "value")])
            .send(app)
            .await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.text(), "value");
    }
}
