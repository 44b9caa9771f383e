//! Entity kinds and their field schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three kinds of entity managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A single piece of work.
    Todo,
    /// A group of todos.
    Project,
    /// A label attachable to todos and projects.
    Category,
}

/// The value type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free text.
    String,
    /// `true` / `false`.
    Boolean,
}

impl FieldType {
    /// Upper-case type name used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Boolean => "BOOLEAN",
        }
    }
}

/// When a field must be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Required on create and on full replace, and must not be empty.
    Mandatory,
    /// Required on create only; a full replace substitutes the default.
    RequiredOnCreate,
    /// Never required; the default applies when omitted.
    Optional,
}

/// Declaration of one field in an entity schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Wire name of the field.
    pub name: &'static str,
    /// Value type.
    pub field_type: FieldType,
    /// Presence rule.
    pub presence: Presence,
}

impl FieldDef {
    const fn new(name: &'static str, field_type: FieldType, presence: Presence) -> Self {
        Self {
            name,
            field_type,
            presence,
        }
    }
}

const TODO_FIELDS: &[FieldDef] = &[
    FieldDef::new("title", FieldType::String, Presence::Mandatory),
    FieldDef::new("doneStatus", FieldType::Boolean, Presence::Optional),
    FieldDef::new("description", FieldType::String, Presence::Optional),
];

const PROJECT_FIELDS: &[FieldDef] = &[
    FieldDef::new("title", FieldType::String, Presence::RequiredOnCreate),
    FieldDef::new("completed", FieldType::Boolean, Presence::Optional),
    FieldDef::new("active", FieldType::Boolean, Presence::Optional),
    FieldDef::new("description", FieldType::String, Presence::Optional),
];

const CATEGORY_FIELDS: &[FieldDef] = &[
    FieldDef::new("title", FieldType::String, Presence::Mandatory),
    FieldDef::new("description", FieldType::String, Presence::Optional),
];

impl EntityKind {
    /// All kinds, in a stable order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Todo, EntityKind::Project, EntityKind::Category];

    /// Collection name used in paths and envelopes (`todos`).
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Todo => "todos",
            EntityKind::Project => "projects",
            EntityKind::Category => "categories",
        }
    }

    /// Element name used for a single entity (`todo`).
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Todo => "todo",
            EntityKind::Project => "project",
            EntityKind::Category => "category",
        }
    }

    /// The declared fields, in rendering order.
    pub fn schema(&self) -> &'static [FieldDef] {
        match self {
            EntityKind::Todo => TODO_FIELDS,
            EntityKind::Project => PROJECT_FIELDS,
            EntityKind::Category => CATEGORY_FIELDS,
        }
    }

    /// Position of `name` in the schema.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.schema().iter().position(|f| f.name == name)
    }

    /// Returns true if `name` is a declared field of this kind.
    pub fn has_field(&self, name: &str) -> bool {
        self.field_index(name).is_some()
    }

    /// Parses a collection name.
    pub fn from_plural(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.plural() == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_plural(s).ok_or_else(|| format!("unknown collection: {}", s))
    }
}
