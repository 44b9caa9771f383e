//! Caller-supplied field sets.
//!
//! A [`FieldSet`] is the decoded body of a create or update request before
//! any schema validation. The codec produces it from JSON or XML; the store
//! validates it against the kind's schema.

/// One decoded input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    /// A string, number or null in the source document.
    Text(String),
    /// A native boolean in the source document.
    Bool(bool),
    /// An array or object where a scalar was expected.
    Nested,
}

impl InputValue {
    /// The textual form of the value, if it has one.
    pub fn as_text(&self) -> Option<String> {
        match self {
            InputValue::Text(s) => Some(s.clone()),
            InputValue::Bool(b) => Some(b.to_string()),
            InputValue::Nested => None,
        }
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Bool(b)
    }
}

/// An ordered set of named input values.
///
/// Names are kept in first-seen order; inserting an existing name replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    entries: Vec<(String, InputValue)>,
}

impl FieldSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<InputValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Looks up a value by name.
    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns true if `name` was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if nothing was supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of supplied names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Supplied entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldSet
where
    K: Into<String>,
    V: Into<InputValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = FieldSet::new().with("title", "a").with("description", "b");
        set.insert("title", "c");

        let names: Vec<_> = set.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["title", "description"]);
        assert_eq!(set.get("title"), Some(&InputValue::Text("c".into())));
    }

    #[test]
    fn test_text_forms() {
        assert_eq!(InputValue::Bool(true).as_text().as_deref(), Some("true"));
        assert_eq!(InputValue::Nested.as_text(), None);
    }
}
