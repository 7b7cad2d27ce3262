//! # Numeric Projection
//!
//! Integers, floats, and booleans share one numeric axis for ordering
//! purposes. [`key_float`] places a resolved key on that axis; [`num_less`]
//! is the exact comparison used when two keys of the same kind land on the
//! same point, where the `f64` projection has lost precision.

use crate::value::KeyValue;

/// Project a key onto `f64`.
///
/// Returns `None` for text and other non-numeric kinds. Booleans project to
/// `0.0` and `1.0`. Indirections are resolved first.
pub fn key_float(key: &KeyValue<'_>) -> Option<f64> {
    match key.resolve() {
        KeyValue::Int(i) => Some(*i as f64),
        KeyValue::Uint(u) => Some(*u as f64),
        KeyValue::Float(f) => Some(*f),
        KeyValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        KeyValue::Text(_) | KeyValue::Other | KeyValue::Indirect(_) => None,
    }
}

/// Classify a parsed document number. Integers that fit `i64` are `Int`,
/// larger ones `Uint`, everything else `Float`. Both document adapters
/// share this rule.
#[cfg(any(feature = "yaml", feature = "json"))]
pub(crate) fn number_key(
    int: Option<i64>,
    uint: Option<u64>,
    float: Option<f64>,
) -> KeyValue<'static> {
    match (int, uint, float) {
        (Some(i), _, _) => KeyValue::Int(i),
        (None, Some(u), _) => KeyValue::Uint(u),
        (None, None, Some(f)) => KeyValue::Float(f),
        (None, None, None) => KeyValue::Other,
    }
}

/// Exact `a < b` for two resolved keys of the same numeric kind.
///
/// # Panics
///
/// Panics if the keys are not both the same numeric kind. The comparator
/// only calls this after both sides projected successfully and their kinds
/// matched, so reaching the panic is a bug in the caller.
pub(crate) fn num_less(a: &KeyValue<'_>, b: &KeyValue<'_>) -> bool {
    match (a.resolve(), b.resolve()) {
        (KeyValue::Int(x), KeyValue::Int(y)) => x < y,
        (KeyValue::Uint(x), KeyValue::Uint(y)) => x < y,
        (KeyValue::Float(x), KeyValue::Float(y)) => x < y,
        (KeyValue::Bool(x), KeyValue::Bool(y)) => !*x && *y,
        (x, y) => unreachable!("not a number: {x} vs {y}"),
    }
}
