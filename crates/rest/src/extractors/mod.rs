//! Axum extractors for Todo Manager requests.
//!
//! - [`Negotiated`] - Response format from the `Accept` header
//! - [`Payload`] - Entity fields from a JSON or XML request body

mod negotiated;
mod payload;

pub use negotiated::Negotiated;
pub use payload::Payload;
