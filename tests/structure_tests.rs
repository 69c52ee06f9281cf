mod common;

use keyget::{Path, Segment, Value};
use serde_json::json;

#[test]
fn test_structure_of_nested_array() {
    let tree = Value::from(json!({ "a": [{ "b": 1 }] }));
    let entries = keyget::structure(&tree);
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].path,
        Path::new(vec![Segment::key("a"), Segment::index(0), Segment::key("b")])
    );
    assert_eq!(entries[0].value, &Value::from(1));
}

#[test]
fn test_structure_emits_leaves_in_order() {
    let tree = Value::from(json!({ "name": "Ada", "langs": ["en", "fr"], "meta": { "active": true } }));
    let paths: Vec<String> = keyget::structure(&tree)
        .iter()
        .map(|entry| entry.path.to_string())
        .collect();
    assert_eq!(paths, vec!["name", "langs.0", "langs.1", "meta.active"]);
}

#[test]
fn test_structure_of_scalar() {
    let tree = Value::from(3);
    let entries = keyget::structure(&tree);
    assert_eq!(entries.len(), 1);
    assert!(entries[0].path.is_empty());
    assert_eq!(entries[0].value, &tree);
}

#[test]
fn test_structure_treats_methods_as_leaves() {
    let method = Value::method(|_, _| Value::Null);
    let tree: Value = [("run", method.clone())].into_iter().collect();
    let entries = keyget::structure(&tree);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].value, &method);
}

#[test]
fn test_structure_serializes() -> Result<(), Box<dyn std::error::Error>> {
    let tree = Value::from(json!({ "a": [{ "b": 1 }] }));
    let serialized = serde_json::to_value(keyget::structure(&tree))?;
    assert_eq!(serialized, json!([{ "path": ["a", 0, "b"], "value": 1 }]));
    Ok(())
}

#[test]
fn test_structure_with_prefix() {
    let tree = json!([1]);
    let entries = keyget::structure_with_prefix(&tree, &[Segment::key("root")]);
    assert_eq!(entries[0].path.to_string(), "root.0");
}
