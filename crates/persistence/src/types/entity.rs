//! Stored entities and their identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::kind::{EntityKind, FieldType};
use super::relation::Relation;

/// A per-kind entity identifier.
///
/// Identifiers are allocated monotonically from 1 and rendered as decimal
/// strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Wraps a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Parses a path segment. Anything that is not a plain decimal number
    /// (`-1`, `abc`, `tasks`) is not an identifier.
    pub fn parse(segment: &str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse().ok().map(Self)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("not an entity id: {}", s))
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A validated field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// String field content.
    Text(String),
    /// Boolean field content.
    Bool(bool),
}

impl FieldValue {
    /// The value a field takes when it is not supplied.
    pub fn default_for(field_type: FieldType) -> Self {
        match field_type {
            FieldType::String => FieldValue::Text(String::new()),
            FieldType::Boolean => FieldValue::Bool(false),
        }
    }

    /// Returns the text if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// The ids on the far side of one relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedIds {
    /// The relation read.
    pub relation: Relation,
    /// Linked ids, in link order.
    pub ids: Vec<EntityId>,
}

/// A snapshot of one entity, including the ids it is currently linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    kind: EntityKind,
    id: EntityId,
    values: Vec<FieldValue>,
    related: Vec<RelatedIds>,
}

impl Entity {
    /// Builds a snapshot. `values` follows the order of `kind.schema()`.
    pub fn new(kind: EntityKind, id: EntityId, values: Vec<FieldValue>) -> Self {
        Self {
            kind,
            id,
            values,
            related: Vec::new(),
        }
    }

    /// Attaches the linked ids for each relation of the kind.
    pub fn with_related(mut self, related: Vec<RelatedIds>) -> Self {
        self.related = related;
        self
    }

    /// The entity kind.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The entity id.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Looks up a field by wire name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.kind.field_index(name).and_then(|i| self.values.get(i))
    }

    /// The `title` field, present on every kind.
    pub fn title(&self) -> &str {
        self.get("title").and_then(FieldValue::as_text).unwrap_or_default()
    }

    /// Field names paired with values, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.kind
            .schema()
            .iter()
            .map(|def| def.name)
            .zip(self.values.iter())
    }

    /// Linked ids per relation. Relations with no links are included with
    /// an empty id list.
    pub fn related(&self) -> &[RelatedIds] {
        &self.related
    }

    /// Linked ids for one relation.
    pub fn related_ids(&self, relation: Relation) -> &[EntityId] {
        self.related
            .iter()
            .find(|r| r.relation == relation)
            .map(|r| r.ids.as_slice())
            .unwrap_or_default()
    }

    /// `{kind}/{id}`, as used in error messages.
    pub fn url(&self) -> String {
        format!("{}/{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse_rejects_non_numeric() {
        assert_eq!(EntityId::parse("12"), Some(EntityId::new(12)));
        assert_eq!(EntityId::parse("-1"), None);
        assert_eq!(EntityId::parse("tasks"), None);
        assert_eq!(EntityId::parse(""), None);
        assert_eq!(EntityId::parse("+3"), None);
    }

    #[test]
    fn test_entity_field_access() {
        let entity = Entity::new(
            EntityKind::Todo,
            EntityId::new(7),
            vec![
                FieldValue::Text("scan paperwork".into()),
                FieldValue::Bool(false),
                FieldValue::Text(String::new()),
            ],
        );

        assert_eq!(entity.title(), "scan paperwork");
        assert_eq!(entity.get("doneStatus"), Some(&FieldValue::Bool(false)));
        assert_eq!(entity.get("active"), None);
        assert_eq!(entity.url(), "todos/7");
        assert!(entity.related_ids(Relation::TodoCategories).is_empty());

        let names: Vec<_> = entity.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["title", "doneStatus", "description"]);
    }
}
