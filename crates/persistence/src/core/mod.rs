//! Core storage traits and schema validation.
//!
//! - [`EntityStorage`] - CRUD over the entity tables
//! - [`RelationshipStorage`] - link, unlink and relationship views
//! - [`validation`] - schema checks shared by every backend
//!
//! ```text
//! EntityStorage
//!     └── RelationshipStorage
//! ```

mod storage;
pub mod validation;

pub use storage::{EntityStorage, RelationshipStorage};
