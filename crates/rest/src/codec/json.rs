//! JSON representation.

use serde_json::{Map, Value, json};
use todo_persistence::types::{Entity, EntityKind, FieldSet, FieldValue, InputValue};

use super::{CodecError, ERROR_ENVELOPE};

/// Builds the JSON object for one entity. Keys keep insertion order
/// (`preserve_order`), so `id` comes first and fields follow the schema.
pub fn entity_value(entity: &Entity) -> Value {
    let mut object = Map::new();
    object.insert("id".to_string(), Value::String(entity.id().to_string()));

    for (name, value) in entity.fields() {
        let text = match value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Bool(b) => b.to_string(),
        };
        object.insert(name.to_string(), Value::String(text));
    }

    for related in entity.related().iter().filter(|r| !r.ids.is_empty()) {
        let refs = related
            .ids
            .iter()
            .map(|id| json!({ "id": id.to_string() }))
            .collect();
        object.insert(related.relation.name().to_string(), Value::Array(refs));
    }

    Value::Object(object)
}

pub(super) fn encode_entity(entity: &Entity) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&entity_value(entity))?)
}

pub(super) fn encode_collection(
    kind: EntityKind,
    entities: &[Entity],
) -> Result<Vec<u8>, CodecError> {
    let items: Vec<Value> = entities.iter().map(entity_value).collect();
    let mut envelope = Map::new();
    envelope.insert(kind.plural().to_string(), Value::Array(items));
    Ok(serde_json::to_vec(&Value::Object(envelope))?)
}

pub(super) fn encode_errors(messages: &[String]) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&json!({ ERROR_ENVELOPE: messages }))?)
}

pub(super) fn decode_fields(body: &[u8]) -> Result<FieldSet, CodecError> {
    let value: Value = serde_json::from_slice(body)?;
    let object = match value {
        Value::Object(object) => object,
        other => return Err(CodecError::NotAnObject(type_name(&other))),
    };

    Ok(object
        .into_iter()
        .map(|(name, value)| (name, input_value(value)))
        .collect())
}

fn input_value(value: Value) -> InputValue {
    match value {
        Value::String(s) => InputValue::Text(s),
        Value::Bool(b) => InputValue::Bool(b),
        Value::Number(n) => InputValue::Text(n.to_string()),
        Value::Null => InputValue::Text(String::new()),
        Value::Array(_) | Value::Object(_) => InputValue::Nested,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
