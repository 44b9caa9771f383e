//! XML representation.
//!
//! Entities are elements named after the kind (`<todo>`), with one child
//! element per field. Relation references repeat the relation element once
//! per linked id:
//!
//! ```xml
//! <project>
//!   <id>1</id><title>Office Work</title><completed>false</completed>
//!   <active>false</active><description/>
//!   <tasks><id>1</id></tasks><tasks><id>2</id></tasks>
//! </project>
//! ```

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesRef, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use todo_persistence::types::{Entity, EntityKind, FieldSet, InputValue};

use super::{CodecError, ERROR_ELEMENT, ERROR_ENVELOPE};

pub(super) fn encode_entity(entity: &Entity) -> Result<Vec<u8>, CodecError> {
    let mut writer = Writer::new(Vec::new());
    write_entity(&mut writer, entity)?;
    Ok(writer.into_inner())
}

pub(super) fn encode_collection(
    kind: EntityKind,
    entities: &[Entity],
) -> Result<Vec<u8>, CodecError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Start(BytesStart::new(kind.plural())))?;
    for entity in entities {
        write_entity(&mut writer, entity)?;
    }
    writer.write_event(Event::End(BytesEnd::new(kind.plural())))?;
    Ok(writer.into_inner())
}

pub(super) fn encode_errors(messages: &[String]) -> Result<Vec<u8>, CodecError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Start(BytesStart::new(ERROR_ENVELOPE)))?;
    for message in messages {
        write_text_element(&mut writer, ERROR_ELEMENT, message)?;
    }
    writer.write_event(Event::End(BytesEnd::new(ERROR_ENVELOPE)))?;
    Ok(writer.into_inner())
}

fn write_entity<W: Write>(writer: &mut Writer<W>, entity: &Entity) -> Result<(), CodecError> {
    let element = entity.kind().singular();
    writer.write_event(Event::Start(BytesStart::new(element)))?;

    write_text_element(writer, "id", &entity.id().to_string())?;
    for (name, value) in entity.fields() {
        write_text_element(writer, name, &value.to_string())?;
    }

    for related in entity.related() {
        let name = related.relation.name();
        for id in &related.ids {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            write_text_element(writer, "id", &id.to_string())?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new(element)))?;
    Ok(())
}

/// `<name>text</name>`, or `<name/>` for empty text.
fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), CodecError> {
    if text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(name)))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }
    Ok(())
}

/// A field element being read.
struct OpenField {
    name: String,
    text: String,
    nested: bool,
}

/// Reads `<anything><field>value</field>…</anything>`. The root element's
/// name is not checked. A field element that contains elements decodes as
/// [`InputValue::Nested`].
pub(super) fn decode_fields(body: &[u8]) -> Result<FieldSet, CodecError> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut fields = FieldSet::new();
    let mut depth = 0usize;
    let mut open: Option<OpenField> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                depth += 1;
                match depth {
                    1 => {}
                    2 => {
                        open = Some(OpenField {
                            name: utf8(start.name().as_ref())?.to_string(),
                            text: String::new(),
                            nested: false,
                        })
                    }
                    _ => mark_nested(&mut open),
                }
            }
            Event::Empty(start) => match depth {
                0 => break,
                1 => fields.insert(utf8(start.name().as_ref())?, InputValue::Text(String::new())),
                _ => mark_nested(&mut open),
            },
            Event::End(_) => {
                if depth == 2 {
                    if let Some(field) = open.take() {
                        let value = if field.nested {
                            InputValue::Nested
                        } else {
                            InputValue::Text(field.text)
                        };
                        fields.insert(field.name, value);
                    }
                }
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            Event::Text(text) if depth == 2 => push_text(&mut open, utf8(&text)?),
            Event::CData(data) if depth == 2 => push_text(&mut open, utf8(&data)?),
            Event::GeneralRef(reference) if depth == 2 => {
                push_text(&mut open, &resolve_reference(&reference)?)
            }
            Event::Eof if depth > 0 => {
                return Err(CodecError::Xml("unexpected end of document".to_string()));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(fields)
}

fn mark_nested(open: &mut Option<OpenField>) {
    if let Some(field) = open.as_mut() {
        field.nested = true;
    }
}

fn push_text(open: &mut Option<OpenField>, text: &str) {
    if let Some(field) = open.as_mut() {
        field.text.push_str(text);
    }
}

fn utf8(bytes: &[u8]) -> Result<&str, CodecError> {
    std::str::from_utf8(bytes).map_err(|_| CodecError::Encoding)
}

/// Resolves `&amp;`, `&#38;`, `&#x26;` and the other predefined entities.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, CodecError> {
    let name = utf8(reference)?;
    let unknown = || CodecError::Xml(format!("unknown entity reference &{};", name));

    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => code.parse(),
        }
        .map_err(|_| unknown())?;
        return char::from_u32(value)
            .map(String::from)
            .ok_or_else(unknown);
    }

    quick_xml::escape::resolve_predefined_entity(name)
        .map(str::to_string)
        .ok_or_else(unknown)
}
