use serde_json::{Map, Value};

impl_tree!(Value, Map<String, Value>);
