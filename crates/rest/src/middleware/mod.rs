//! Middleware for the Todo Manager REST API.
//!
//! - [`content_type`] - Content negotiation and error re-rendering

pub mod content_type;

pub use content_type::{negotiate_errors, negotiate_format, request_body_format};
