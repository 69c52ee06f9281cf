use keyget::{Path, Segment, Value};
use serde_json::json;

/// Acyclic trees of assorted shapes.
pub fn sample_trees() -> Vec<Value> {
    vec![
        Value::from(json!({ "a": { "b": 1 } })),
        Value::from(json!({ "a": [{ "b": 1 }, { "c": [true, null] }] })),
        Value::from(json!([1, [2, [3, { "deep": "x" }]]])),
        Value::from(json!({ "user": { "name": "Ada", "tags": ["admin", "ops"], "age": 36 } })),
        Value::from(json!({ "z": 1, "y": { "x": 2 }, "w": [3] })),
        Value::from(json!("scalar")),
        Value::from(json!(null)),
        Value::from(json!(42)),
    ]
}

/// Paths free of reserved segments, in both explicit and dotted forms.
pub fn sample_paths() -> Vec<Path> {
    vec![
        Path::new(vec![Segment::key("a")]),
        Path::new(vec![Segment::key("a"), Segment::key("b")]),
        Path::new(vec![Segment::key("a"), Segment::index(0)]),
        Path::new(vec![Segment::index(0), Segment::key("a")]),
        Path::new(vec![Segment::index(1), Segment::index(1), Segment::index(0)]),
        Path::new(vec![Segment::key("user"), Segment::key("tags"), Segment::index(2)]),
        Path::parse("a.b.c.d"),
        Path::parse("y.x"),
        Path::parse("new"),
    ]
}
