//! Initial data installed at server start.
//!
//! | Kind | Id | Title |
//! |------|----|-------|
//! | todo | 1 | scan paperwork |
//! | todo | 2 | file paperwork |
//! | project | 1 | Office Work |
//! | category | 1 | Office |
//! | category | 2 | Home |
//!
//! Project 1 has todos 1 and 2 as tasks; todo 1 is in category 1.

use crate::types::{EntityId, EntityKind, FieldSet, Relation};

/// Entities to create, in creation order. Ids are assigned by the store,
/// starting from 1 for each kind.
pub fn seed_entities() -> Vec<(EntityKind, FieldSet)> {
    vec![
        (
            EntityKind::Todo,
            FieldSet::new().with("title", "scan paperwork"),
        ),
        (
            EntityKind::Todo,
            FieldSet::new().with("title", "file paperwork"),
        ),
        (
            EntityKind::Project,
            FieldSet::new().with("title", "Office Work"),
        ),
        (EntityKind::Category, FieldSet::new().with("title", "Office")),
        (EntityKind::Category, FieldSet::new().with("title", "Home")),
    ]
}

/// Links between seeded entities, as `(relation, source, target)`.
pub const SEED_LINKS: &[(Relation, EntityId, EntityId)] = &[
    (Relation::ProjectTasks, EntityId::new(1), EntityId::new(1)),
    (Relation::ProjectTasks, EntityId::new(1), EntityId::new(2)),
    (Relation::TodoCategories, EntityId::new(1), EntityId::new(1)),
];
