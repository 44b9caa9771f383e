//! In-memory backend.
//!
//! Entity tables, per-kind id allocators and the relationship graph held in
//! process memory behind a single lock.

mod allocator;
mod backend;
mod database;
mod graph;

pub use backend::MemoryBackend;
