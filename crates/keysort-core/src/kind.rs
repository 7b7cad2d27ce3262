//! # Key Kinds — The Fixed Rank Table
//!
//! Every key resolves to exactly one [`Kind`]. When two keys cannot be
//! ordered by value (different kinds with no numeric projection, or numeric
//! kinds that project to the same value) the comparator falls back to the
//! kind rank defined here.
//!
//! The rank is an explicit constant table rather than the declaration order
//! of the enum: reordering variants must never reorder rendered documents.

use serde::{Deserialize, Serialize};

/// The resolved kind of a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    Uint,
    /// Floating point of any width.
    Float,
    /// Boolean.
    Bool,
    /// Text.
    Text,
    /// Null, containers, absent indirections, and anything unclassified.
    Other,
}

/// Number of distinct key kinds.
pub const KIND_COUNT: usize = 6;

/// Kind rank, lowest first. `KIND_ORDER[k.rank() as usize] == k` for every kind.
///
/// | Rank | Kind  |
/// |------|-------|
/// | 0    | Bool  |
/// | 1    | Int   |
/// | 2    | Uint  |
/// | 3    | Float |
/// | 4    | Other |
/// | 5    | Text  |
pub const KIND_ORDER: [Kind; KIND_COUNT] = [
    Kind::Bool,
    Kind::Int,
    Kind::Uint,
    Kind::Float,
    Kind::Other,
    Kind::Text,
];

impl Kind {
    /// Position of this kind in [`KIND_ORDER`].
    pub const fn rank(self) -> u8 {
        match self {
            Self::Bool => 0,
            Self::Int => 1,
            Self::Uint => 2,
            Self::Float => 3,
            Self::Other => 4,
            Self::Text => 5,
        }
    }

    /// True for kinds that have a numeric projection.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Uint | Self::Float)
    }

    /// Returns the snake_case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
