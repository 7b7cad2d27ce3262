//! # YAML Document Keys
//!
//! Classifies `serde_yaml::Value` keys as [`KeyValue`]s and orders the keys
//! of a parsed mapping. Text is borrowed from the document.
//!
//! Classification:
//!
//! | YAML value            | Key value                        |
//! |-----------------------|----------------------------------|
//! | integer fitting `i64` | `Int`                            |
//! | integer fitting `u64` | `Uint`                           |
//! | float                 | `Float`                          |
//! | bool                  | `Bool`                           |
//! | string                | `Text`                           |
//! | `!tag value`          | `Indirect` around `value`        |
//! | null, sequence, map   | `Other`                          |

use serde_yaml::{Mapping, Value};

use crate::compare::key_cmp;
use crate::numeric::number_key;
use crate::value::KeyValue;

impl<'a> From<&'a Value> for KeyValue<'a> {
    fn from(v: &'a Value) -> Self {
        match v {
            Value::Bool(b) => KeyValue::Bool(*b),
            Value::Number(n) => number_key(n.as_i64(), n.as_u64(), n.as_f64()),
            Value::String(s) => KeyValue::from(s.as_str()),
            Value::Tagged(tagged) => KeyValue::from(&tagged.value).indirect(),
            Value::Null | Value::Sequence(_) | Value::Mapping(_) => KeyValue::Other,
        }
    }
}

/// Keys of `mapping` in canonical order.
pub fn sort_mapping_keys(mapping: &Mapping) -> Vec<&Value> {
    tracing::trace!(count = mapping.len(), "sorting yaml mapping keys");
    let mut keys: Vec<(KeyValue<'_>, &Value)> = mapping
        .iter()
        .map(|(k, _)| (KeyValue::from(k), k))
        .collect();
    keys.sort_by(|a, b| key_cmp(&a.0, &b.0));
    keys.into_iter().map(|(_, k)| k).collect()
}
