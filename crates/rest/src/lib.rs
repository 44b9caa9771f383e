//! # todo-rest - Todo Manager REST API
//!
//! This crate serves todos, projects and categories over HTTP, together with
//! the many-to-many relationships between them, in JSON or XML.
//!
//! ## Features
//!
//! - **CRUD**: Create, read, amend (POST), replace (PUT) and delete for every kind
//! - **Relationships**: Link, create-and-link, view and unlink related entities
//! - **Content Negotiation**: JSON and XML request and response bodies
//! - **Legacy Compatibility**: Optional reproduction of the legacy error messages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use todo_rest::{create_app, ServerConfig};
//! use todo_persistence::backends::memory::MemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a storage backend holding the seed data
//!     let backend = MemoryBackend::seeded()?;
//!
//!     // Create the Axum application
//!     let app = create_app(backend);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:4567").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | list | GET | `/[kind]` |
//! | create | POST | `/[kind]` |
//! | read | GET | `/[kind]/[id]` |
//! | amend | POST | `/[kind]/[id]` |
//! | replace | PUT | `/[kind]/[id]` |
//! | delete | DELETE | `/[kind]/[id]` |
//! | relationship view | GET | `/[kind]/[id]/[relation]` |
//! | link | POST | `/[kind]/[id]/[relation]` |
//! | related read | GET | `/[kind]/[id]/[relation]/[target]` |
//! | related amend | POST | `/[kind]/[id]/[relation]/[target]` |
//! | unlink | DELETE | `/[kind]/[id]/[relation]/[target]` |
//! | health | GET | `/health` |
//!
//! Kinds are `todos`, `projects` and `categories`. Relations are
//! `todos/{id}/categories`, `todos/{id}/tasksof`, `projects/{id}/tasks`,
//! `projects/{id}/categories`, `categories/{id}/todos` and
//! `categories/{id}/projects`.
//!
//! ## HTTP Headers
//!
//! - `Accept` - Response format (`application/json` default, `application/xml`)
//! - `Content-Type` - Request body format
//!
//! ## Error Handling
//!
//! Errors are returned as `{"errorMessages": ["..."]}` (or the XML
//! equivalent) with these status codes:
//!
//! | HTTP Status | Description |
//! |-------------|-------------|
//! | 400 | Validation error or malformed body |
//! | 404 | Entity, link or route not found |
//! | 413 | Request body too large |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and HTTP status mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`codec`] - JSON and XML representations
//! - [`resolver`] - Path segment resolution
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Content negotiation
//! - [`extractors`] - Axum extractors for formats and bodies
//! - [`responses`] - Response formatting
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod resolver;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use codec::MediaFormat;
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use todo_persistence::core::RelationshipStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: RelationshipStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Arguments
///
/// * `storage` - The storage backend to use
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust,ignore
/// use todo_rest::{create_app_with_config, ServerConfig};
/// use todo_persistence::backends::memory::MemoryBackend;
///
/// let config = ServerConfig {
///     legacy_error_messages: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: RelationshipStorage + Send + Sync + 'static,
{
    create_app_with_shared_storage(Arc::new(storage), config)
}

/// Creates the Axum application over storage the caller keeps a handle to.
pub fn create_app_with_shared_storage<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: RelationshipStorage + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    // Create application state
    let state = AppState::new(storage, config.clone());

    // Build the router with all routes
    let router = routing::create_routes(state)
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(axum::middleware::from_fn(middleware::negotiate_errors));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "todo_rest={level},todo_persistence={level},todo_server={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
