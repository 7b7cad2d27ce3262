//! # JSON Document Keys
//!
//! JSON object keys are always strings, so ordering an object is purely
//! natural string order. The `From<&serde_json::Value>` classification is
//! still provided for callers that build maps keyed by arbitrary JSON values.

use serde_json::{Map, Value};

use crate::natural::natural_cmp;
use crate::numeric::number_key;
use crate::value::KeyValue;

impl<'a> From<&'a Value> for KeyValue<'a> {
    fn from(v: &'a Value) -> Self {
        match v {
            Value::Bool(b) => KeyValue::Bool(*b),
            Value::Number(n) => number_key(n.as_i64(), n.as_u64(), n.as_f64()),
            Value::String(s) => KeyValue::from(s.as_str()),
            Value::Null | Value::Array(_) | Value::Object(_) => KeyValue::Other,
        }
    }
}

/// Keys of `object` in natural order.
pub fn sort_object_keys(object: &Map<String, Value>) -> Vec<&String> {
    tracing::trace!(count = object.len(), "sorting json object keys");
    let mut keys: Vec<&String> = object.keys().collect();
    keys.sort_by(|a, b| natural_cmp(a, b));
    keys
}
