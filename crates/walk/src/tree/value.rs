use keyget_types::{Map, Value};

impl_tree!(Value, Map);
