//! Schema validation of caller-supplied field sets.
//!
//! Checks run in a fixed order so that a body with several problems always
//! reports the same one: unknown names, then the `id` rule, then missing
//! required fields, then individual values.

use crate::error::ValidationError;
use crate::types::{
    EntityId, EntityKind, FieldDef, FieldSet, FieldType, FieldValue, InputValue, Presence,
};

/// Validates a creation body and returns the full value row.
pub fn validate_create(
    kind: EntityKind,
    fields: &FieldSet,
) -> Result<Vec<FieldValue>, ValidationError> {
    check_names(kind, fields)?;
    if fields.contains("id") {
        return Err(ValidationError::IdNotAllowed);
    }
    check_required(kind, fields, |p| p != Presence::Optional)?;
    build_row(kind, fields, None)
}

/// Validates a full-replacement body. Omitted fields take their defaults.
pub fn validate_replace(
    kind: EntityKind,
    id: EntityId,
    fields: &FieldSet,
) -> Result<Vec<FieldValue>, ValidationError> {
    check_names(kind, fields)?;
    check_id(kind, id, fields)?;
    check_required(kind, fields, |p| p == Presence::Mandatory)?;
    build_row(kind, fields, None)
}

/// Validates a full-replacement body for a target that is not an id at
/// all (`todos/-1`). Same checks as [`validate_replace`] minus the `id`
/// rule, so a bad body still reports 400 before the lookup fails.
pub fn validate_replace_fields(
    kind: EntityKind,
    fields: &FieldSet,
) -> Result<(), ValidationError> {
    check_names(kind, fields)?;
    check_required(kind, fields, |p| p == Presence::Mandatory)?;
    build_row(kind, fields, None).map(|_| ())
}

/// Validates a partial update against the current row and returns the
/// merged row. Fields not named in the body keep their current value.
pub fn validate_merge(
    kind: EntityKind,
    id: EntityId,
    current: &[FieldValue],
    fields: &FieldSet,
) -> Result<Vec<FieldValue>, ValidationError> {
    check_names(kind, fields)?;
    check_id(kind, id, fields)?;
    build_row(kind, fields, Some(current))
}

fn check_names(kind: EntityKind, fields: &FieldSet) -> Result<(), ValidationError> {
    match fields
        .iter()
        .find(|(name, _)| *name != "id" && !kind.has_field(name))
    {
        Some((name, _)) => Err(ValidationError::FieldNotFound {
            field: name.to_string(),
        }),
        None => Ok(()),
    }
}

fn check_id(kind: EntityKind, id: EntityId, fields: &FieldSet) -> Result<(), ValidationError> {
    let Some(value) = fields.get("id") else {
        return Ok(());
    };
    let text = value.as_text().unwrap_or_default();
    if EntityId::parse(text.trim()) == Some(id) {
        Ok(())
    } else {
        Err(ValidationError::IdMismatch {
            kind,
            id: id.to_string(),
            value: text,
        })
    }
}

fn check_required(
    kind: EntityKind,
    fields: &FieldSet,
    required: impl Fn(Presence) -> bool,
) -> Result<(), ValidationError> {
    match kind
        .schema()
        .iter()
        .find(|def| required(def.presence) && !fields.contains(def.name))
    {
        Some(def) => Err(ValidationError::MissingRequired {
            field: def.name.to_string(),
        }),
        None => Ok(()),
    }
}

fn build_row(
    kind: EntityKind,
    fields: &FieldSet,
    current: Option<&[FieldValue]>,
) -> Result<Vec<FieldValue>, ValidationError> {
    kind.schema()
        .iter()
        .enumerate()
        .map(|(i, def)| match fields.get(def.name) {
            Some(input) => coerce(def, input),
            None => Ok(current
                .and_then(|row| row.get(i).cloned())
                .unwrap_or_else(|| FieldValue::default_for(def.field_type))),
        })
        .collect()
}

fn coerce(def: &FieldDef, input: &InputValue) -> Result<FieldValue, ValidationError> {
    let invalid = || ValidationError::InvalidValue {
        field: def.name.to_string(),
        expected: def.field_type,
    };

    let value = match (def.field_type, input) {
        (_, InputValue::Nested) => return Err(invalid()),
        (FieldType::Boolean, InputValue::Bool(b)) => FieldValue::Bool(*b),
        (FieldType::Boolean, InputValue::Text(s)) => match s.trim() {
            t if t.eq_ignore_ascii_case("true") => FieldValue::Bool(true),
            t if t.eq_ignore_ascii_case("false") => FieldValue::Bool(false),
            _ => return Err(invalid()),
        },
        (FieldType::String, InputValue::Text(s)) => FieldValue::Text(s.clone()),
        (FieldType::String, InputValue::Bool(b)) => FieldValue::Text(b.to_string()),
    };

    if def.presence == Presence::Mandatory && value.as_text().is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyField {
            field: def.name.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_create_applies_defaults() {
        let row = validate_create(EntityKind::Todo, &FieldSet::new().with("title", "t")).unwrap();
        assert_eq!(row, vec![text("t"), FieldValue::Bool(false), text("")]);
    }

    #[test]
    fn test_create_requires_title() {
        let err = validate_create(EntityKind::Todo, &FieldSet::new()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequired {
                field: "title".into()
            }
        );

        // project titles are required at creation too
        let err = validate_create(EntityKind::Project, &FieldSet::new().with("active", true))
            .unwrap_err();
        assert!(matches!(err, ValidationError::MissingRequired { .. }));
    }

    #[test]
    fn test_unknown_field_reported_before_missing_field() {
        let err = validate_create(EntityKind::Todo, &FieldSet::new().with("fake_attribute", "x"))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::FieldNotFound {
                field: "fake_attribute".into()
            }
        );
    }

    #[test]
    fn test_create_rejects_id() {
        let fields = FieldSet::new().with("id", "5").with("title", "t");
        assert_eq!(
            validate_create(EntityKind::Category, &fields).unwrap_err(),
            ValidationError::IdNotAllowed
        );
    }

    #[test]
    fn test_boolean_coercion() {
        let fields = FieldSet::new().with("title", "t").with("doneStatus", "TRUE");
        let row = validate_create(EntityKind::Todo, &fields).unwrap();
        assert_eq!(row[1], FieldValue::Bool(true));

        let fields = FieldSet::new().with("title", "t").with("doneStatus", "maybe");
        let err = validate_create(EntityKind::Todo, &fields).unwrap_err();
        assert_eq!(err.to_string(), "Failed Validation: doneStatus should be BOOLEAN");
    }

    #[test]
    fn test_nested_value_rejected() {
        let mut fields = FieldSet::new().with("title", "t");
        fields.insert("description", InputValue::Nested);
        let err = validate_create(EntityKind::Todo, &fields).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed Validation: description should be STRING"
        );
    }

    #[test]
    fn test_empty_mandatory_title() {
        let err = validate_create(EntityKind::Category, &FieldSet::new().with("title", ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed Validation: title : can not be empty");

        // project titles are not mandatory, so empty text is fine
        assert!(validate_create(EntityKind::Project, &FieldSet::new().with("title", "")).is_ok());
    }

    #[test]
    fn test_replace_resets_omitted_fields() {
        let fields = FieldSet::new().with("active", true);
        let row = validate_replace(EntityKind::Project, EntityId::new(1), &fields).unwrap();
        assert_eq!(
            row,
            vec![text(""), FieldValue::Bool(false), FieldValue::Bool(true), text("")]
        );

        let err = validate_replace(EntityKind::Todo, EntityId::new(1), &FieldSet::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "title : field is mandatory");
    }

    #[test]
    fn test_replace_fields_without_target_id() {
        let err = validate_replace_fields(EntityKind::Todo, &FieldSet::new()).unwrap_err();
        assert_eq!(err.to_string(), "title : field is mandatory");

        let err = validate_replace_fields(EntityKind::Todo, &FieldSet::new().with("fake", "x"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Could not find field: fake");

        // no target id, so a body id is not compared against anything
        let fields = FieldSet::new().with("id", "7").with("title", "t");
        assert!(validate_replace_fields(EntityKind::Todo, &fields).is_ok());
    }

    #[test]
    fn test_merge_keeps_current_values() {
        let current = vec![
            text("Office Work"),
            FieldValue::Bool(false),
            FieldValue::Bool(false),
            text(""),
        ];
        let fields = FieldSet::new().with("active", true);
        let row = validate_merge(EntityKind::Project, EntityId::new(1), &current, &fields).unwrap();
        assert_eq!(row[0], text("Office Work"));
        assert_eq!(row[2], FieldValue::Bool(true));

        let unchanged =
            validate_merge(EntityKind::Project, EntityId::new(1), &current, &FieldSet::new())
                .unwrap();
        assert_eq!(unchanged, current);
    }

    #[test]
    fn test_update_id_must_match() {
        let current = vec![text("x"), text("")];
        let ok = FieldSet::new().with("id", "2").with("title", "y");
        assert!(validate_merge(EntityKind::Category, EntityId::new(2), &current, &ok).is_ok());

        let bad = FieldSet::new().with("id", "3");
        let err =
            validate_merge(EntityKind::Category, EntityId::new(2), &current, &bad).unwrap_err();
        assert_eq!(err.to_string(), "Can not amend id on Entity categories/2 to 3");
    }
}
