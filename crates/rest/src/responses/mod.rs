//! Response formatting for the Todo Manager REST API.
//!
//! - [`format`] - Entity, collection, empty and error responses in the negotiated format

pub mod format;

pub use format::{collection_response, empty_response, entity_response, error_response};
