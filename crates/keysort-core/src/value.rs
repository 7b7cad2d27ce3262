//! # Key Values
//!
//! `KeyValue` is the tagged variant the comparator operates on. Scalars map
//! one-to-one onto a [`Kind`]; `Indirect` models an optional or boxed layer
//! that must be looked through before the key can be classified.

use std::borrow::Cow;
use std::fmt;

use crate::kind::Kind;

/// A single map key, possibly wrapped in indirection layers.
///
/// Text is held as `Cow<'a, str>` so keys can be borrowed straight out of a
/// parsed document.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValue<'a> {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Text.
    Text(Cow<'a, str>),
    /// Null, a container, or anything else with no ordering of its own.
    Other,
    /// An optional reference layer. `None` is an absent indirection.
    Indirect(Option<Box<KeyValue<'a>>>),
}

impl<'a> KeyValue<'a> {
    /// Follow indirections until a concrete value or an absent indirection
    /// is reached.
    pub fn resolve(&self) -> &KeyValue<'a> {
        let mut current = self;
        while let KeyValue::Indirect(Some(inner)) = current {
            current = inner.as_ref();
        }
        current
    }

    /// Kind of the resolved value. An absent indirection is [`Kind::Other`].
    pub fn kind(&self) -> Kind {
        match self.resolve() {
            KeyValue::Int(_) => Kind::Int,
            KeyValue::Uint(_) => Kind::Uint,
            KeyValue::Float(_) => Kind::Float,
            KeyValue::Bool(_) => Kind::Bool,
            KeyValue::Text(_) => Kind::Text,
            KeyValue::Other | KeyValue::Indirect(_) => Kind::Other,
        }
    }

    /// Resolved text, if this key is text.
    pub fn as_text(&self) -> Option<&str> {
        match self.resolve() {
            KeyValue::Text(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Wrap this key in one indirection layer.
    pub fn indirect(self) -> Self {
        KeyValue::Indirect(Some(Box::new(self)))
    }

    /// An absent indirection.
    pub fn absent() -> Self {
        KeyValue::Indirect(None)
    }

    /// Detach from any borrowed text.
    pub fn into_owned(self) -> KeyValue<'static> {
        match self {
            KeyValue::Int(i) => KeyValue::Int(i),
            KeyValue::Uint(u) => KeyValue::Uint(u),
            KeyValue::Float(f) => KeyValue::Float(f),
            KeyValue::Bool(b) => KeyValue::Bool(b),
            KeyValue::Text(s) => KeyValue::Text(Cow::Owned(s.into_owned())),
            KeyValue::Other => KeyValue::Other,
            KeyValue::Indirect(inner) => {
                KeyValue::Indirect(inner.map(|v| Box::new((*v).into_owned())))
            }
        }
    }
}

impl fmt::Display for KeyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            KeyValue::Int(i) => write!(f, "{i}"),
            KeyValue::Uint(u) => write!(f, "{u}"),
            KeyValue::Float(x) => write!(f, "{x:?}"),
            KeyValue::Bool(b) => write!(f, "{b}"),
            KeyValue::Text(s) => write!(f, "{s:?}"),
            KeyValue::Other => f.write_str("<other>"),
            KeyValue::Indirect(_) => f.write_str("<nil>"),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for KeyValue<'_> {
                fn from(v: $t) -> Self {
                    KeyValue::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64: u8, u16, u32, u64, usize);

impl From<f32> for KeyValue<'_> {
    fn from(v: f32) -> Self {
        KeyValue::Float(f64::from(v))
    }
}

impl From<f64> for KeyValue<'_> {
    fn from(v: f64) -> Self {
        KeyValue::Float(v)
    }
}

impl From<bool> for KeyValue<'_> {
    fn from(v: bool) -> Self {
        KeyValue::Bool(v)
    }
}

impl<'a> From<&'a str> for KeyValue<'a> {
    fn from(v: &'a str) -> Self {
        KeyValue::Text(Cow::Borrowed(v))
    }
}

impl From<String> for KeyValue<'_> {
    fn from(v: String) -> Self {
        KeyValue::Text(Cow::Owned(v))
    }
}

impl<'a> From<Cow<'a, str>> for KeyValue<'a> {
    fn from(v: Cow<'a, str>) -> Self {
        KeyValue::Text(v)
    }
}

impl From<()> for KeyValue<'_> {
    fn from(_: ()) -> Self {
        KeyValue::Other
    }
}

impl<'a, T: Into<KeyValue<'a>>> From<Option<T>> for KeyValue<'a> {
    fn from(v: Option<T>) -> Self {
        KeyValue::Indirect(v.map(|inner| Box::new(inner.into())))
    }
}

impl<'a, T: Into<KeyValue<'a>>> From<Box<T>> for KeyValue<'a> {
    fn from(v: Box<T>) -> Self {
        KeyValue::Indirect(Some(Box::new((*v).into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_follows_nested_indirection() {
        let key = KeyValue::from(7i32).indirect().indirect().indirect();
        assert_eq!(key.resolve(), &KeyValue::Int(7));
        assert_eq!(key.kind(), Kind::Int);
    }

    #[test]
    fn test_absent_indirection_is_other() {
        assert_eq!(KeyValue::absent().kind(), Kind::Other);
        let wrapped = KeyValue::absent().indirect();
        assert_eq!(wrapped.kind(), Kind::Other);
        assert_eq!(wrapped.resolve(), &KeyValue::Indirect(None));
    }

    #[test]
    fn test_option_and_box_are_indirections() {
        let some: KeyValue = Some("name").into();
        assert_eq!(some.kind(), Kind::Text);
        assert_eq!(some.as_text(), Some("name"));

        let none: KeyValue = Option::<i64>::None.into();
        assert_eq!(none, KeyValue::Indirect(None));
        assert_eq!(none.kind(), Kind::Other);

        let boxed: KeyValue = Box::new(Some(2.5f64)).into();
        assert_eq!(boxed.kind(), Kind::Float);
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(KeyValue::from(-3i8), KeyValue::Int(-3));
        assert_eq!(KeyValue::from(i64::MIN), KeyValue::Int(i64::MIN));
        assert_eq!(KeyValue::from(255u8), KeyValue::Uint(255));
        assert_eq!(KeyValue::from(u64::MAX), KeyValue::Uint(u64::MAX));
        assert_eq!(KeyValue::from(1.5f32), KeyValue::Float(1.5));
    }

    #[test]
    fn test_unit_is_other() {
        assert_eq!(KeyValue::from(()).kind(), Kind::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyValue::from(-4i64).to_string(), "-4");
        assert_eq!(KeyValue::from(2.0f64).to_string(), "2.0");
        assert_eq!(KeyValue::from("a b").to_string(), "\"a b\"");
        assert_eq!(KeyValue::from(true).indirect().to_string(), "true");
        assert_eq!(KeyValue::absent().to_string(), "<nil>");
        assert_eq!(KeyValue::Other.to_string(), "<other>");
    }

    #[test]
    fn test_into_owned_preserves_value() {
        let text = String::from("key");
        let borrowed = KeyValue::from(text.as_str()).indirect();
        let owned: KeyValue<'static> = borrowed.clone().into_owned();
        assert_eq!(owned, borrowed);
    }
}
