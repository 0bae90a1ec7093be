//! Tests for the JSON mapping and model adapters

use std::collections::HashMap;
use std::io::Cursor;

use dataslot_io::error::Error;
use dataslot_io::{model_reader, read_json_mapping, write_json_mapping, write_model_json, Model};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SampleModel {
    name: String,
    value: i64,
}

impl Model for SampleModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Bounded {
    value: i64,
}

impl Model for Bounded {
    fn validate(&self) -> dataslot_io::Result<()> {
        if self.value < 0 {
            return Err(Error::validation("value", "must be non-negative"));
        }
        Ok(())
    }
}

fn mapping(value: Value) -> IndexMap<String, Value> {
    serde_json::from_value(value).expect("Failed to build mapping")
}

#[test]
fn test_json_mapping_round_trip() {
    let data = mapping(json!({"key": "value", "num": 42}));
    let mut buf = Cursor::new(Vec::new());
    write_json_mapping(&mut buf, &data).expect("Failed to write mapping");

    buf.set_position(0);
    let restored = read_json_mapping(&mut buf).expect("Failed to read mapping");
    assert_eq!(restored, data);
}

#[test]
fn test_json_mapping_is_indented() {
    let data = mapping(json!({"a": 1}));
    let mut buf = Vec::new();
    write_json_mapping(&mut buf, &data).expect("Failed to write mapping");

    let raw = String::from_utf8(buf).expect("Output is not UTF-8");
    assert!(raw.contains('\n'));
    assert!(raw.contains("  \"a\""));
    assert_eq!(raw, "{\n  \"a\": 1\n}");
}

#[test]
fn test_json_mapping_nested_keeps_key_order() {
    let data = mapping(json!({"outer": {"inner": [1, 2, 3]}, "flag": true}));
    let mut buf = Cursor::new(Vec::new());
    write_json_mapping(&mut buf, &data).expect("Failed to write mapping");

    buf.set_position(0);
    let restored = read_json_mapping(&mut buf).expect("Failed to read mapping");
    assert_eq!(restored, data);
    assert_eq!(restored.keys().collect::<Vec<_>>(), vec!["outer", "flag"]);
}

#[test]
fn test_json_mapping_writer_leaves_cursor_at_end() {
    let data = mapping(json!({"x": [true, null]}));
    let mut buf = Cursor::new(Vec::new());
    write_json_mapping(&mut buf, &data).expect("Failed to write mapping");
    assert_eq!(buf.position() as usize, buf.get_ref().len());
}

#[test]
fn test_json_mapping_unrepresentable_value_fails() {
    let mut inner = HashMap::new();
    inner.insert((1, 2), 3);
    let mut data = IndexMap::new();
    data.insert("bad".to_string(), inner);

    let mut buf = Vec::new();
    let err = write_json_mapping(&mut buf, &data).expect_err("Tuple keys are not JSON");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_model_writer_uses_field_names() {
    let model = SampleModel {
        name: "test".to_string(),
        value: 99,
    };
    let mut buf = Vec::new();
    write_model_json(&mut buf, &model).expect("Failed to write model");

    let parsed: Value = serde_json::from_slice(&buf).expect("Output is not JSON");
    assert_eq!(parsed, json!({"name": "test", "value": 99}));
    assert!(String::from_utf8_lossy(&buf).contains("\n  \"name\""));
}

#[test]
fn test_model_reader_round_trip() {
    let original = SampleModel {
        name: "round-trip".to_string(),
        value: 7,
    };
    let mut buf = Cursor::new(Vec::new());
    write_model_json(&mut buf, &original).expect("Failed to write model");

    buf.set_position(0);
    let reader = model_reader::<SampleModel>();
    let restored = reader.read(&mut buf).expect("Failed to read model");
    assert_eq!(restored, original);
}

#[test]
fn test_model_reader_rejects_invalid_json() {
    let mut buf = Cursor::new("not valid json");
    let err = model_reader::<SampleModel>()
        .read(&mut buf)
        .expect_err("Non-JSON input must fail");
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_model_reader_reports_wrong_type_field() {
    let mut buf = Cursor::new(r#"{"name": "x", "value": "seven"}"#);
    match model_reader::<SampleModel>().read(&mut buf) {
        Err(Error::Validation { path, .. }) => assert_eq!(path, "value"),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_model_reader_reports_missing_field() {
    let mut buf = Cursor::new(r#"{"name": "x"}"#);
    match model_reader::<SampleModel>().read(&mut buf) {
        Err(Error::Validation { message, .. }) => assert!(message.contains("value")),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_model_reader_rejects_trailing_content() {
    let mut buf = Cursor::new(r#"{"name": "x", "value": 1} {"#);
    let err = model_reader::<SampleModel>()
        .read(&mut buf)
        .expect_err("Trailing content must fail");
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_model_reader_runs_validate_hook() {
    let reader = model_reader::<Bounded>();

    let mut ok = Cursor::new(r#"{"value": 3}"#);
    assert_eq!(reader.read(&mut ok).expect("Valid model"), Bounded { value: 3 });

    let mut bad = Cursor::new(r#"{"value": -3}"#);
    match reader.read(&mut bad) {
        Err(Error::Validation { path, message }) => {
            assert_eq!(path, "value");
            assert!(message.contains("non-negative"));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}
