//! # Ordering Audits
//!
//! Checks for callers that want to verify, rather than assume, that keys
//! are in canonical order: `ensure_sorted` for a rendered sequence and
//! `check_strict_weak_order` for the comparator itself over a key set.

use crate::compare::key_less;
use crate::error::KeyOrderError;
use crate::value::KeyValue;

/// Verify that `keys` is in comparator order.
///
/// Adjacent keys that compare equal are accepted in either order.
///
/// # Errors
///
/// Returns `KeyOrderError::NotSorted` at the first key that sorts strictly
/// before its predecessor.
pub fn ensure_sorted(keys: &[KeyValue<'_>]) -> Result<(), KeyOrderError> {
    for (i, pair) in keys.windows(2).enumerate() {
        if key_less(&pair[1], &pair[0]) {
            let err = KeyOrderError::NotSorted {
                position: i + 1,
                previous: pair[0].to_string(),
                current: pair[1].to_string(),
            };
            tracing::debug!(error = %err, "key sequence not in canonical order");
            return Err(err);
        }
    }
    Ok(())
}

/// Verify that [`key_less`] is a strict weak ordering over every pair and
/// triple drawn from `keys`: irreflexive, asymmetric, transitive, and with
/// transitive incomparability.
///
/// Cubic in `keys.len()`; meant for tests and diagnostics, not hot paths.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_strict_weak_order(keys: &[KeyValue<'_>]) -> Result<(), KeyOrderError> {
    let result = find_violation(keys);
    if let Err(err) = &result {
        tracing::debug!(error = %err, count = keys.len(), "comparator violated strict weak ordering");
    }
    result
}

fn incomparable(a: &KeyValue<'_>, b: &KeyValue<'_>) -> bool {
    !key_less(a, b) && !key_less(b, a)
}

fn find_violation(keys: &[KeyValue<'_>]) -> Result<(), KeyOrderError> {
    for a in keys {
        if key_less(a, a) {
            return Err(KeyOrderError::Reflexive { key: a.to_string() });
        }
    }

    for a in keys {
        for b in keys {
            if !key_less(a, b) {
                continue;
            }
            if key_less(b, a) {
                return Err(KeyOrderError::Asymmetric {
                    left: a.to_string(),
                    right: b.to_string(),
                });
            }
            for c in keys {
                if key_less(b, c) && !key_less(a, c) {
                    return Err(KeyOrderError::Intransitive {
                        first: a.to_string(),
                        second: b.to_string(),
                        third: c.to_string(),
                    });
                }
            }
        }
    }

    for a in keys {
        for b in keys {
            if !incomparable(a, b) {
                continue;
            }
            for c in keys {
                if incomparable(b, c) && !incomparable(a, c) {
                    return Err(KeyOrderError::IncomparableIntransitive {
                        first: a.to_string(),
                        second: b.to_string(),
                        third: c.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
