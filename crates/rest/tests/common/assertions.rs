//! HTTP response assertions.
//!
//! Provides assertion utilities for testing HTTP responses in both formats.

use axum::http::StatusCode;
use axum_test::TestResponse;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::Value;

/// Asserts the exact `Content-Type` of a response.
pub fn assert_content_type(response: &TestResponse, expected: &str) {
    let actual = response
        .headers()
        .get("content-type")
        .expect("Should have Content-Type")
        .to_str()
        .unwrap();
    assert_eq!(actual, expected, "Unexpected Content-Type");
}

/// Asserts a JSON error envelope holding exactly one message.
pub fn assert_json_error(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    assert_content_type(response, "application/json");

    let body: Value = response.json();
    assert_eq!(
        body,
        serde_json::json!({ "errorMessages": [message] }),
        "Unexpected error envelope"
    );
}

/// Asserts an XML error envelope holding exactly one message.
pub fn assert_xml_error(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    assert_content_type(response, "application/xml");

    let body = response.text();
    assert!(
        body.starts_with("<errorMessages>"),
        "Expected an XML error envelope, got: {}",
        body
    );
    assert_eq!(xml_values(&body, "errorMessage"), vec![message.to_string()]);
}

/// Returns the text of every `<name>` element in document order, with
/// entity references resolved. Text of nested elements is concatenated.
pub fn xml_values(body: &str, name: &str) -> Vec<String> {
    let mut reader = Reader::from_str(body);
    let mut values = Vec::new();
    let mut capture: Option<String> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event().expect("Response should be well-formed XML") {
            Event::Start(start) => {
                if capture.is_some() {
                    depth += 1;
                } else if start.name().as_ref() == name.as_bytes() {
                    capture = Some(String::new());
                }
            }
            Event::Empty(start) => {
                if capture.is_none() && start.name().as_ref() == name.as_bytes() {
                    values.push(String::new());
                }
            }
            Event::End(_) if capture.is_some() => {
                if depth == 0 {
                    values.extend(capture.take());
                } else {
                    depth -= 1;
                }
            }
            Event::Text(text) => {
                if let Some(value) = capture.as_mut() {
                    value.push_str(std::str::from_utf8(&text).expect("UTF-8 text"));
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(value) = capture.as_mut() {
                    let entity = std::str::from_utf8(&reference).expect("UTF-8 reference");
                    value.push_str(
                        quick_xml::escape::resolve_predefined_entity(entity)
                            .expect("predefined entity"),
                    );
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    values
}

/// Returns the entities in a JSON envelope.
pub fn envelope<'a>(body: &'a Value, plural: &str) -> &'a Vec<Value> {
    body.get(plural)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("Expected a '{}' envelope, got: {}", plural, body))
}

/// Returns the `id` of every element of a JSON array of entities or references.
pub fn ids(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| item["id"].as_str().expect("string id").to_string())
        .collect()
}
