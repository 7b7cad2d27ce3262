//! # Key Comparator
//!
//! `key_less` is a strict weak ordering over [`KeyValue`]s, intended to
//! drive a standard sort before a map is rendered.
//!
//! ## Decision Order
//!
//! 1. Resolve indirections on both sides.
//! 2. If both sides have a numeric projection: different projections order
//!    numerically; equal projections of different kinds order by kind rank;
//!    equal projections of the same kind use the exact typed comparison.
//! 3. Otherwise, unless both sides are text, order by kind rank.
//! 4. Both sides are text: natural string order.

use std::cmp::Ordering;

use crate::natural::natural_less;
use crate::numeric::{key_float, num_less};
use crate::value::KeyValue;

/// Strict `a < b` over map keys.
pub fn key_less(a: &KeyValue<'_>, b: &KeyValue<'_>) -> bool {
    let a = a.resolve();
    let b = b.resolve();
    let ak = a.kind();
    let bk = b.kind();

    if let (Some(af), Some(bf)) = (key_float(a), key_float(b)) {
        if af != bf {
            return af < bf;
        }
        if ak != bk {
            return ak.rank() < bk.rank();
        }
        return num_less(a, b);
    }

    match (a.as_text(), b.as_text()) {
        (Some(at), Some(bt)) => natural_less(at, bt),
        _ => ak.rank() < bk.rank(),
    }
}

/// [`key_less`] as an [`Ordering`], for use with `sort_by` and friends.
///
/// Keys that are neither less nor greater than each other are `Equal`.
pub fn key_cmp(a: &KeyValue<'_>, b: &KeyValue<'_>) -> Ordering {
    if key_less(a, b) {
        Ordering::Less
    } else if key_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sort keys in place. The sort is stable: keys that compare `Equal` keep
/// their input order.
pub fn sort_keys(keys: &mut [KeyValue<'_>]) {
    tracing::trace!(count = keys.len(), "sorting map keys");
    keys.sort_by(key_cmp);
}

/// Sort arbitrary records by a key projected out of each record.
///
/// The projection runs once per comparison side, so it should be cheap
/// (borrowing text rather than allocating where possible).
pub fn sort_keys_by<T, F>(items: &mut [T], mut key: F)
where
    F: for<'r> FnMut(&'r T) -> KeyValue<'r>,
{
    tracing::trace!(count = items.len(), "sorting records by map key");
    items.sort_by(|a, b| key_cmp(&key(a), &key(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;

    fn k<'a>(v: impl Into<KeyValue<'a>>) -> KeyValue<'a> {
        v.into()
    }

    #[test]
    fn test_numbers_order_by_value_across_kinds() {
        assert!(key_less(&k(1i64), &k(2.5f64)));
        assert!(!key_less(&k(2.5f64), &k(1i64)));
        assert!(key_less(&k(-1i64), &k(0u64)));
        assert!(key_less(&k(3u8), &k(3.5f32)));
    }

    #[test]
    fn test_bool_projects_onto_numbers() {
        assert!(key_less(&k(true), &k(2i64)));
        assert!(!key_less(&k(2i64), &k(true)));
        assert!(key_less(&k(false), &k(0.5f64)));
    }

    #[test]
    fn test_equal_projection_breaks_tie_by_kind_rank() {
        // Bool ranks below Int.
        assert!(key_less(&k(false), &k(0i64)));
        assert!(!key_less(&k(0i64), &k(false)));
        // Int < Uint < Float.
        assert!(key_less(&k(1i64), &k(1u64)));
        assert!(key_less(&k(1u64), &k(1.0f64)));
        assert!(!key_less(&k(1.0f64), &k(1i64)));
    }

    #[test]
    fn test_same_kind_equal_projection_uses_exact_value() {
        let a = k(9_007_199_254_740_993i64);
        let b = k(9_007_199_254_740_992i64);
        assert!(key_less(&b, &a));
        assert!(!key_less(&a, &b));
        assert_eq!(key_cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_text_uses_natural_order() {
        assert!(key_less(&k("file2"), &k("file10")));
        assert!(key_less(&k("2"), &k("02")));
        assert!(!key_less(&k("02"), &k("2")));
        assert!(key_less(&k("abc"), &k("abcd")));
    }

    #[test]
    fn test_text_never_projects_numerically() {
        // "10" is text, so it ranks after every number.
        assert!(key_less(&k(100i64), &k("10")));
        assert!(!key_less(&k("10"), &k(100i64)));
    }

    #[test]
    fn test_mixed_kinds_fall_back_to_rank() {
        assert!(key_less(&k(1.5f64), &KeyValue::Other));
        assert!(key_less(&KeyValue::Other, &k("a")));
        assert!(!key_less(&k("a"), &KeyValue::Other));
        assert!(key_less(&KeyValue::absent(), &k("a")));
        assert_eq!(key_cmp(&KeyValue::Other, &KeyValue::absent()), Ordering::Equal);
    }

    #[test]
    fn test_indirections_are_transparent() {
        let a = k(Some(Some(1i64)));
        let b = k(2i64).indirect();
        assert!(key_less(&a, &b));
        assert!(key_less(&k(Some("a2")), &k(Box::new("a10"))));
        assert_eq!(key_cmp(&k(Some(5u32)), &k(5u32)), Ordering::Equal);
    }

    #[test]
    fn test_irreflexive_for_each_kind() {
        let keys = [
            k(0i64),
            k(0u64),
            k(0.0f64),
            k(false),
            k("x"),
            KeyValue::Other,
            KeyValue::absent(),
        ];
        for key in &keys {
            assert!(!key_less(key, key), "{key} < itself");
        }
    }

    #[test]
    fn test_sort_keys_mixed_set() {
        let mut keys = vec![k(10i64), k(2i64), k("b"), k("a10"), k("a2"), k(true)];
        sort_keys(&mut keys);
        assert_eq!(
            keys,
            vec![k(true), k(2i64), k(10i64), k("a2"), k("a10"), k("b")]
        );
    }

    #[test]
    fn test_sort_keys_is_stable_for_ties() {
        let mut keys = vec![
            KeyValue::Other,
            k(Option::<i64>::None),
            KeyValue::Other.indirect(),
        ];
        let before = keys.clone();
        sort_keys(&mut keys);
        assert_eq!(keys, before);
        assert!(keys.iter().all(|key| key.kind() == Kind::Other));
    }

    #[test]
    fn test_sort_keys_by_projection() {
        let mut rows = vec![("item10", 1), ("item9", 2), ("item09", 3)];
        sort_keys_by(&mut rows, |row| KeyValue::from(row.0));
        let names: Vec<&str> = rows.iter().map(|row| row.0).collect();
        assert_eq!(names, vec!["item9", "item09", "item10"]);
    }
}
