//! Dynamic value representation for rendering.
//!
//! This module provides the [`Value`] enum, the closed set of kinds the renderer knows
//! how to print, and [`Kind`], its fieldless mirror.
//!
//! ## Creating Values
//!
//! ```rust
//! use readable::Value;
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let byte = Value::from(18u8);
//! let text = Value::from("hello");
//! let ints = Value::from(vec![0, 1, -2]);
//! let list = Value::seq(["a", "b"]);
//! let map = Value::map([(0, "A"), (1, "B")]);
//!
//! assert_eq!(byte.to_string(), "0x12");
//! assert_eq!(map.to_string(), "{0–\"A\", 1–\"B\"}");
//! ```
//!
//! ## Converting from Rust Types
//!
//! Anything implementing `serde::Serialize` converts through [`to_value`](crate::to_value):
//!
//! ```rust
//! use readable::to_value;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! assert_eq!(value.to_string(), "{\"x\"–10, \"y\"–20}");
//! ```

use crate::{ErrorInfo, Locale, Object, ReadableOptions, Renderer, StackFrame, TypeName, ValueMap};
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};

/// Any value the renderer accepts.
///
/// Variants are listed in the order the renderer resolves them.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Type(TypeName),
    Bool(bool),
    Byte(u8),
    Char(char),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    BoolArray(Vec<bool>),
    ByteArray(Vec<u8>),
    CharArray(Vec<char>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
    Array(Vec<Value>),
    Seq(Vec<Value>),
    Map(ValueMap),
    File(PathBuf),
    Error(ErrorInfo),
    StackTrace(Vec<Option<StackFrame>>),
    Locale(Locale),
    Object(Object),
}

/// The category a [`Value`] falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Absent,
    Type,
    Bool,
    Byte,
    Char,
    Int,
    Long,
    Float,
    Double,
    String,
    BoolArray,
    ByteArray,
    CharArray,
    IntArray,
    LongArray,
    FloatArray,
    DoubleArray,
    Array,
    Seq,
    Map,
    File,
    Error,
    StackTrace,
    Locale,
    Object,
}

impl Kind {
    /// Returns `true` for kinds that contain other values.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            Kind::BoolArray
                | Kind::ByteArray
                | Kind::CharArray
                | Kind::IntArray
                | Kind::LongArray
                | Kind::FloatArray
                | Kind::DoubleArray
                | Kind::Array
                | Kind::Seq
                | Kind::Map
        )
    }
}

impl Value {
    /// Returns the value's kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Absent,
            Value::Type(_) => Kind::Type,
            Value::Bool(_) => Kind::Bool,
            Value::Byte(_) => Kind::Byte,
            Value::Char(_) => Kind::Char,
            Value::Int(_) => Kind::Int,
            Value::Long(_) => Kind::Long,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::BoolArray(_) => Kind::BoolArray,
            Value::ByteArray(_) => Kind::ByteArray,
            Value::CharArray(_) => Kind::CharArray,
            Value::IntArray(_) => Kind::IntArray,
            Value::LongArray(_) => Kind::LongArray,
            Value::FloatArray(_) => Kind::FloatArray,
            Value::DoubleArray(_) => Kind::DoubleArray,
            Value::Array(_) => Kind::Array,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::File(_) => Kind::File,
            Value::Error(_) => Kind::Error,
            Value::StackTrace(_) => Kind::StackTrace,
            Value::Locale(_) => Kind::Locale,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Builds a type descriptor for `T`.
    ///
    /// ```rust
    /// use readable::Value;
    ///
    /// assert_eq!(Value::type_of::<[i32; 4]>().to_string(), "i32[]");
    /// ```
    #[must_use]
    pub fn type_of<T: ?Sized>() -> Self {
        Value::Type(TypeName::of::<T>())
    }

    /// Builds a sequence from any iterable.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds an object array from any iterable.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds a mapping from key/value pairs, keeping their order.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(entries.into_iter().collect())
    }

    /// Builds a file-system entry.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Value::File(path.as_ref().to_path_buf())
    }

    /// Builds an error value from any `std::error::Error`.
    ///
    /// The type shown is the static type of `err`, so a boxed trait object renders as
    /// `dyn Error: ..`; see [`ErrorInfo::from_error`].
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Value::Error(ErrorInfo::from_error(err))
    }

    /// Renders this value on its own with the given options.
    #[must_use]
    pub fn render_with_options(&self, options: &ReadableOptions) -> String {
        let mut renderer = Renderer::new(options.clone());
        renderer.render(self);
        renderer.into_inner()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_options(&ReadableOptions::default()))
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::$variant(value.into())
            }
        })*
    };
}

impl_from_scalar!(
    bool => Bool,
    u8 => Byte,
    char => Char,
    i16 => Int,
    u16 => Int,
    i32 => Int,
    u32 => Long,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    TypeName => Type,
    ValueMap => Map,
    PathBuf => File,
    ErrorInfo => Error,
    Locale => Locale,
    Object => Object,
);

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Byte(value as u8)
    }
}

// integers that may not fit in an i64 fall back to a lossy Double
macro_rules! impl_from_wide {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                match i64::try_from(value) {
                    Ok(v) => Value::Long(v),
                    Err(_) => Value::Double(value as f64),
                }
            }
        })*
    };
}

impl_from_wide!(u64, usize, isize, i128, u128);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&Path> for Value {
    fn from(value: &Path) -> Self {
        Value::File(value.to_path_buf())
    }
}

impl From<Vec<Option<StackFrame>>> for Value {
    fn from(value: Vec<Option<StackFrame>>) -> Self {
        Value::StackTrace(value)
    }
}

impl From<Vec<StackFrame>> for Value {
    fn from(value: Vec<StackFrame>) -> Self {
        Value::StackTrace(value.into_iter().map(Some).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

macro_rules! impl_from_primitive_array {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$t>> for Value {
                fn from(value: Vec<$t>) -> Self {
                    Value::$variant(value)
                }
            }

            impl From<&[$t]> for Value {
                fn from(value: &[$t]) -> Self {
                    Value::$variant(value.to_vec())
                }
            }

            impl<const N: usize> From<[$t; N]> for Value {
                fn from(value: [$t; N]) -> Self {
                    Value::$variant(value.to_vec())
                }
            }
        )*
    };
}

impl_from_primitive_array!(
    bool => BoolArray,
    u8 => ByteArray,
    char => CharArray,
    i32 => IntArray,
    i64 => LongArray,
    f32 => FloatArray,
    f64 => DoubleArray,
);

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl<const N: usize> From<[Value; N]> for Value {
    fn from(value: [Value; N]) -> Self {
        Value::Array(value.into())
    }
}

macro_rules! impl_from_collection {
    ($($collection:ident),*) => {
        $(impl<T: Into<Value>> From<$collection<T>> for Value {
            fn from(value: $collection<T>) -> Self {
                Value::seq(value)
            }
        })*
    };
}

impl_from_collection!(VecDeque, LinkedList, BTreeSet);

impl<T: Into<Value>, S> From<HashSet<T, S>> for Value {
    fn from(value: HashSet<T, S>) -> Self {
        Value::seq(value)
    }
}

impl<T: Into<Value>, S> From<IndexSet<T, S>> for Value {
    fn from(value: IndexSet<T, S>) -> Self {
        Value::seq(value)
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<IndexMap<K, V, S>> for Value {
    fn from(value: IndexMap<K, V, S>) -> Self {
        Value::Map(value.into())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        Value::Map(value.into())
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(value: HashMap<K, V, S>) -> Self {
        Value::Map(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(-1i8), Value::Byte(0xFF));
        assert_eq!(Value::from('z'), Value::Char('z'));
        assert_eq!(Value::from(7i16), Value::Int(7));
        assert_eq!(Value::from(7u32), Value::Long(7));
        assert_eq!(Value::from(0.5f32), Value::Float(0.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(Value::from(5u64), Value::Long(5));
        assert_eq!(Value::from(5usize), Value::Long(5));
        assert_eq!(Value::from(-5i128), Value::Long(-5));
        assert_eq!(Value::from(u64::MAX), Value::Double(u64::MAX as f64));
    }

    #[test]
    fn test_from_collections() {
        assert_eq!(Value::from(vec![1, 2]), Value::IntArray(vec![1, 2]));
        assert_eq!(Value::from(&b"ab"[..]), Value::ByteArray(vec![b'a', b'b']));
        assert_eq!(Value::from([1.0f64]), Value::DoubleArray(vec![1.0]));
        assert_eq!(
            Value::from(VecDeque::from(vec!["x"])),
            Value::Seq(vec![Value::from("x")])
        );
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Value::Null.kind(), Kind::Absent);
        assert_eq!(Value::seq(Vec::<i32>::new()).kind(), Kind::Seq);
        assert_eq!(Value::file("/tmp").kind(), Kind::File);
        assert!(Kind::Map.is_composite());
        assert!(!Kind::String.is_composite());
        assert!(Value::default().is_null());
    }
}
