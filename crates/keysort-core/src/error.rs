//! # Error Types
//!
//! The comparator itself never fails. These errors are produced by the
//! audit functions in [`crate::audit`], which check that a key sequence is
//! sorted or that the comparator behaves as a strict weak ordering over a
//! given key set.
//!
//! Keys are carried in their rendered form so errors are `'static` and can
//! outlive the document they were taken from.

use thiserror::Error;

/// An ordering violation found by an audit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyOrderError {
    /// A key sorts before its predecessor.
    #[error("keys out of order at position {position}: {current} sorts before {previous}")]
    NotSorted {
        /// Index of the offending key.
        position: usize,
        /// The key at `position - 1`.
        previous: String,
        /// The key at `position`.
        current: String,
    },

    /// A key compared less than itself.
    #[error("ordering is not irreflexive: {key} < {key}")]
    Reflexive {
        /// The key.
        key: String,
    },

    /// Two keys each compared less than the other.
    #[error("ordering is not asymmetric: {left} < {right} and {right} < {left}")]
    Asymmetric {
        /// First key.
        left: String,
        /// Second key.
        right: String,
    },

    /// `first < second` and `second < third` but not `first < third`.
    #[error("ordering is not transitive: {first} < {second} < {third} but not {first} < {third}")]
    Intransitive {
        /// First key.
        first: String,
        /// Second key.
        second: String,
        /// Third key.
        third: String,
    },

    /// `first ~ second` and `second ~ third` but `first` and `third` are
    /// ordered, where `~` means neither key is less than the other.
    #[error("incomparability is not transitive: {first} ~ {second} ~ {third} but {first} and {third} are ordered")]
    IncomparableIntransitive {
        /// First key.
        first: String,
        /// Second key.
        second: String,
        /// Third key.
        third: String,
    },
}
