//! Todo Manager Persistence Layer
//!
//! This crate holds the entity store and relationship graph behind the Todo
//! Manager REST service: three entity kinds (todos, projects, categories),
//! per-kind identifier allocation, schema validation and symmetric
//! many-to-many links.
//!
//! # Architecture
//!
//! - [`types`] - Entity kinds, schemas, entities, relations and request payloads
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits and schema validation
//! - [`backends`] - Backend implementations (in-memory)
//! - [`seed`] - The data installed at server start
//!
//! # Quick Start
//!
//! ```
//! use todo_persistence::backends::memory::MemoryBackend;
//! use todo_persistence::core::{EntityStorage, RelationshipStorage};
//! use todo_persistence::types::{EntityKind, FieldSet, LinkPayload, Relation};
//!
//! # tokio_test::block_on(async {
//! let store = MemoryBackend::seeded().unwrap();
//!
//! // Create a todo
//! let todo = store
//!     .create(EntityKind::Todo, FieldSet::new().with("title", "water plants"))
//!     .await
//!     .unwrap();
//! assert_eq!(todo.id().to_string(), "3");
//!
//! // Create a category and link it in one step
//! let payload = LinkPayload::classify(
//!     EntityKind::Category,
//!     FieldSet::new().with("title", "Garden"),
//! );
//! let garden = store
//!     .link_or_create(todo.id(), Relation::TodoCategories, payload)
//!     .await
//!     .unwrap();
//!
//! // The link is visible from both ends
//! let todos = store
//!     .related(Some(garden.id()), Relation::CategoryTodos)
//!     .await
//!     .unwrap();
//! assert_eq!(todos[0].title(), "water plants");
//! # });
//! ```
//!
//! # Errors
//!
//! Every error's `Display` text is the message reported to API clients, for
//! example `Could not find an instance with todos/9` or
//! `title : field is mandatory`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod seed;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Entity, EntityId, EntityKind, FieldSet, LinkPayload, Relation};

// Re-export core traits
pub use core::{EntityStorage, RelationshipStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
