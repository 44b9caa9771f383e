//! Per-kind identifier sequence.

use crate::types::EntityId;

/// Hands out increasing ids starting at 1. Ids are never returned to the
/// pool, so deleted or failed entities leave gaps.
#[derive(Debug, Clone)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    /// Takes the next id.
    pub(crate) fn allocate(&mut self) -> EntityId {
        let id = EntityId::new(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `allocate` will return.
    pub(crate) fn peek(&self) -> EntityId {
        EntityId::new(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.allocate(), EntityId::new(1));
        assert_eq!(ids.allocate(), EntityId::new(2));
        assert_eq!(ids.peek(), EntityId::new(3));
    }
}
