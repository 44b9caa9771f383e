//! Application state for the Todo Manager REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use todo_persistence::core::EntityStorage;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`EntityStorage`])
///
/// # Example
///
/// ```rust,ignore
/// use todo_rest::{AppState, ServerConfig};
/// use todo_persistence::backends::memory::MemoryBackend;
/// use std::sync::Arc;
///
/// let backend = MemoryBackend::seeded()?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: EntityStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns whether relationship edge cases use the legacy messages.
    pub fn legacy_errors(&self) -> bool {
        self.config.legacy_error_messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use todo_persistence::error::StorageResult;
    use todo_persistence::types::{Entity, EntityId, EntityKind, FieldSet};

    // Mock storage for testing
    struct MockStorage;

    #[async_trait]
    impl EntityStorage for MockStorage {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        async fn create(&self, _kind: EntityKind, _fields: FieldSet) -> StorageResult<Entity> {
            unimplemented!()
        }

        async fn read(&self, _kind: EntityKind, _id: EntityId) -> StorageResult<Option<Entity>> {
            unimplemented!()
        }

        async fn list(&self, _kind: EntityKind) -> StorageResult<Vec<Entity>> {
            unimplemented!()
        }

        async fn merge(
            &self,
            _kind: EntityKind,
            _id: EntityId,
            _fields: FieldSet,
        ) -> StorageResult<Entity> {
            unimplemented!()
        }

        async fn replace(
            &self,
            _kind: EntityKind,
            _id: EntityId,
            _fields: FieldSet,
        ) -> StorageResult<Entity> {
            unimplemented!()
        }

        async fn delete(&self, _kind: EntityKind, _id: EntityId) -> StorageResult<()> {
            unimplemented!()
        }

        async fn count(&self, _kind: EntityKind) -> StorageResult<usize> {
            unimplemented!()
        }
    }

    #[test]
    fn test_app_state_creation() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig::default();
        let state = AppState::new(storage, config);

        assert_eq!(state.storage().backend_name(), "mock");
        assert!(state.legacy_errors());
    }

    #[test]
    fn test_app_state_config_access() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig {
            legacy_error_messages: false,
            ..Default::default()
        };
        let state = AppState::new(storage, config);

        assert!(!state.legacy_errors());
    }

    #[test]
    fn test_app_state_clone() {
        let storage = Arc::new(MockStorage);
        let state = AppState::new(storage, ServerConfig::default());
        let cloned = state.clone();

        assert!(std::ptr::eq(state.storage(), cloned.storage()));
        assert_eq!(cloned.legacy_errors(), state.legacy_errors());
    }
}
