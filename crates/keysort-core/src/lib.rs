//! # keysort-core — Deterministic Map Key Ordering
//!
//! Documents parsed from structured markup can carry map keys of mixed
//! kinds: integers, floats, booleans, strings, and the occasional null or
//! container. Rendering such a map reproducibly needs a total, stable,
//! human-friendly order over those keys. This crate is that order.
//!
//! ## Ordering Rules
//!
//! 1. **Indirections are transparent.** `KeyValue::Indirect` layers are
//!    unwrapped before classification. An absent indirection is `Other`.
//!
//! 2. **Numbers and booleans compare by value.** Both sides are projected
//!    onto `f64` (`false` = 0, `true` = 1). Different values order
//!    numerically; equal values of different kinds order by kind rank;
//!    equal values of the same kind use an exact, kind-typed comparison so
//!    64-bit integers beyond `f64` precision still order correctly.
//!
//! 3. **Strings compare naturally.** Digit runs compare by magnitude
//!    (`"file2" < "file10"`), fewer leading zeros first (`"2" < "02"`), and
//!    non-letters sort before letters at the first difference.
//!
//! 4. **Everything else falls back to kind rank.** The rank is the fixed
//!    table [`KIND_ORDER`]: `Bool < Int < Uint < Float < Other < Text`.
//!
//! ## Crate Policy
//!
//! - The comparator is a pure function: no shared state, no I/O, no recursion.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests. The only panic is the exact numeric
//!   comparison on a non-numeric pair, which no public path can reach.
//! - Document model adapters live behind the `yaml` and `json` features.

pub mod audit;
pub mod compare;
pub mod error;
pub mod kind;
pub mod natural;
pub mod numeric;
pub mod value;

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export primary types for ergonomic imports.
pub use audit::{check_strict_weak_order, ensure_sorted};
pub use compare::{key_cmp, key_less, sort_keys, sort_keys_by};
pub use error::KeyOrderError;
pub use kind::{Kind, KIND_COUNT, KIND_ORDER};
pub use natural::{natural_cmp, natural_less};
pub use numeric::key_float;
pub use value::KeyValue;
