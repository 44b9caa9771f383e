//! Storage backend implementations.
//!
//! Each backend implements [`EntityStorage`](crate::core::EntityStorage) and
//! [`RelationshipStorage`](crate::core::RelationshipStorage) and is gated
//! behind a feature flag.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | `memory` | Process-local tables, reset on restart |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "memory")]
//! use todo_persistence::backends::memory::MemoryBackend;
//!
//! # #[cfg(feature = "memory")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Start from the seed data
//! let backend = MemoryBackend::seeded()?;
//!
//! // Or start empty
//! let backend = MemoryBackend::new();
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "memory")]
pub mod memory;
