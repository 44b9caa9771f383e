//! HTTP request handlers for the Todo Manager API.
//!
//! - [`read`] - List a collection, read an entity
//! - [`create`] - Create an entity
//! - [`update`] - Amend (POST) or replace (PUT) an entity
//! - [`delete`] - Delete an entity
//! - [`relationships`] - View, link, unlink and amend related entities
//! - [`health`] - Health check endpoint

pub mod create;
pub mod delete;
pub mod health;
pub mod read;
pub mod relationships;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use read::{list_handler, read_handler};
pub use relationships::{
    amend_related_handler, link_handler, related_handler, related_instance_handler,
    unlink_handler,
};
pub use update::{amend_handler, replace_handler};
