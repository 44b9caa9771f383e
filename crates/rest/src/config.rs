//! Server configuration for the Todo Manager REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TODO_SERVER_PORT` | 4567 | Server port |
//! | `TODO_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `TODO_LOG_LEVEL` | info | Log level |
//! | `TODO_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `TODO_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `TODO_ENABLE_CORS` | true | Enable CORS |
//! | `TODO_CORS_ORIGINS` | * | Allowed origins |
//! | `TODO_CORS_METHODS` | GET,HEAD,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `TODO_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `TODO_LEGACY_ERRORS` | true | Report relationship edge cases with the legacy message |
//! | `TODO_SEED_DATA` | true | Install the seed todos, project and categories at start |
//!
//! # Example
//!
//! ```rust
//! use todo_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     legacy_error_messages: false,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Message reported by the legacy service for two relationship edge cases.
pub const LEGACY_INTERNAL_ERROR: &str = "java.lang.NullPointerException";

/// Server configuration for the Todo Manager REST API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-manager")]
#[command(about = "Todo Manager REST API Server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "TODO_SERVER_PORT", default_value = "4567")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "TODO_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "TODO_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "TODO_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "TODO_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "TODO_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "TODO_CORS_METHODS",
        default_value = "GET,HEAD,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "TODO_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Report an invalid relationship body, and a relationship-instance POST
    /// on a missing parent, as `java.lang.NullPointerException`, as the
    /// legacy service did.
    #[arg(long = "legacy-errors", env = "TODO_LEGACY_ERRORS", default_value = "true")]
    pub legacy_error_messages: bool,

    /// Install the seed data at start.
    #[arg(long, env = "TODO_SEED_DATA", default_value = "true")]
    pub seed_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4567,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,HEAD,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            legacy_error_messages: true,
            seed_data: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.host.trim().is_empty() {
            errors.push("Host cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            ..Self::default()
        }
    }
}
