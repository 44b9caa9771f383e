//! REST API test harness.
//!
//! Provides test servers over the in-memory backend, with or without the
//! seed data.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue, Method};
use axum_test::{TestResponse, TestServer};
use serde_json::Value;
use todo_persistence::backends::memory::MemoryBackend;
use todo_rest::{ServerConfig, create_app_with_shared_storage};

/// `Accept` header name.
pub const ACCEPT: HeaderName = HeaderName::from_static("accept");

/// `application/json`
pub const JSON: HeaderValue = HeaderValue::from_static("application/json");

/// `application/xml`
pub const XML: HeaderValue = HeaderValue::from_static("application/xml");

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::seeded();
///
///     let response = harness.get("/todos/1").await;
///
///     response.assert_status_ok();
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend.
    pub backend: Arc<MemoryBackend>,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// A server holding the seed data.
    pub fn seeded() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// A server holding the seed data with custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = MemoryBackend::seeded().expect("Failed to seed backend");
        Self::with_backend(backend, config)
    }

    /// A server holding no data.
    pub fn empty() -> Self {
        Self::with_backend(MemoryBackend::new(), ServerConfig::for_testing())
    }

    fn with_backend(backend: MemoryBackend, config: ServerConfig) -> Self {
        let backend = Arc::new(backend);
        let app = create_app_with_shared_storage(Arc::clone(&backend), config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            config,
        }
    }

    /// Makes a GET request asking for JSON.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).add_header(ACCEPT, JSON).await
    }

    /// Makes a GET request asking for XML.
    pub async fn get_xml(&self, path: &str) -> TestResponse {
        self.server.get(path).add_header(ACCEPT, XML).await
    }

    /// Makes a HEAD request with the given `Accept` value.
    pub async fn head(&self, path: &str, accept: HeaderValue) -> TestResponse {
        self.server
            .method(Method::HEAD, path)
            .add_header(ACCEPT, accept)
            .await
    }

    /// Makes a POST request with a JSON body, asking for JSON.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server
            .post(path)
            .add_header(ACCEPT, JSON)
            .json(&body)
            .await
    }

    /// Makes a POST request with no body, asking for JSON.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.server.post(path).add_header(ACCEPT, JSON).await
    }

    /// Makes a POST request with an XML body, asking for XML.
    pub async fn post_xml(&self, path: &str, body: &str) -> TestResponse {
        self.server
            .post(path)
            .add_header(ACCEPT, XML)
            .bytes(Bytes::from(body.to_string()))
            .content_type("application/xml")
            .await
    }

    /// Makes a PUT request with a JSON body, asking for JSON.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.server
            .put(path)
            .add_header(ACCEPT, JSON)
            .json(&body)
            .await
    }

    /// Makes a DELETE request asking for JSON.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).add_header(ACCEPT, JSON).await
    }

    /// Makes a DELETE request asking for XML.
    pub async fn delete_xml(&self, path: &str) -> TestResponse {
        self.server.delete(path).add_header(ACCEPT, XML).await
    }
}
