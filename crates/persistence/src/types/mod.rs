//! Core types for stored entities, their schemas and relationships.

mod entity;
mod fields;
mod kind;
mod payload;
mod relation;

pub use entity::{Entity, EntityId, FieldValue, RelatedIds};
pub use fields::{FieldSet, InputValue};
pub use kind::{EntityKind, FieldDef, FieldType, Presence};
pub use payload::LinkPayload;
pub use relation::{Link, Relation};
