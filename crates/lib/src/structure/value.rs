//! The tagged value model for nested structures.
//!
//! This module provides the [`Value`] enum that every structural operation in
//! the crate works on. A value is either a primitive (undefined, null,
//! booleans, numbers, text), a container ([`Value::List`] or [`Value::Map`]),
//! or an opaque [`Callable`].

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Callable, StructureError};

/// Keyed mapping stored inside [`Value::Map`].
///
/// Enumeration follows insertion order; equality does not depend on it.
pub type Map = IndexMap<String, Value>;

/// Values that make up a nested structure.
///
/// # Value Types
///
/// ## Primitives
/// - [`Value::Undefined`] - The absent marker; also a missing slot inside a list
/// - [`Value::Null`] - An explicit null
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floating point numbers
/// - [`Value::Text`] - UTF-8 text strings
///
/// ## Containers
/// - [`Value::List`] - Ordered, index-addressable sequence
/// - [`Value::Map`] - String-keyed mapping
///
/// ## Opaque
/// - [`Value::Function`] - A shared, immutable function value
///
/// Containers own their children, so a value can never contain itself.
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types for ergonomic comparisons:
///
/// ```
/// # use polyfold::structure::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(42 == number);
/// assert!(!(text == 42));
/// ```
///
/// `Int(1)` and `Float(1.0)` are different values.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent marker
    #[default]
    Undefined,
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),

    /// Ordered collection of values
    List(Vec<Value>),
    /// Keyed mapping of values
    Map(Map),

    /// Function value
    Function(Callable),
}

impl Value {
    /// Creates an empty map value.
    pub fn map() -> Self {
        Value::Map(Map::new())
    }

    /// Creates an empty list value.
    pub fn list() -> Self {
        Value::List(Vec::new())
    }

    /// Returns true if this is a primitive (neither container nor function)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Undefined
                | Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::Text(_)
        )
    }

    /// Returns true if this value can hold other values
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns true if this is the absent marker
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a function value
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Truthiness as conventionally defined for dynamic values.
    ///
    /// `undefined`, `null`, `false`, `0`, `0.0`, `NaN` and the empty string are
    /// falsy; everything else, including empty lists and maps, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::List(_) | Value::Map(_) | Value::Function(_) => true,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value of an `Int` or `Float` as `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a function
    pub fn as_function(&self) -> Option<&Callable> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Looks up a dotted path, returning `None` for malformed paths and misses.
    ///
    /// Use [`crate::structure::resolve`] to learn which segment failed.
    ///
    /// ```
    /// # use polyfold::structure::{Map, Value};
    /// let mut inner = Map::new();
    /// inner.insert("name".to_string(), Value::from("Alice"));
    /// let mut root = Map::new();
    /// root.insert("user".to_string(), Value::Map(inner));
    /// let root = Value::Map(root);
    ///
    /// assert_eq!(root.get_path("user.name"), Some(&Value::from("Alice")));
    /// assert_eq!(root.get_path("user.age"), None);
    /// assert_eq!(root.get_path("user..name"), None);
    /// ```
    pub fn get_path(&self, path: impl AsRef<str>) -> Option<&Value> {
        let path: super::PathBuf = path.as_ref().parse().ok()?;
        super::resolve(self, &path).ok()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                write!(f, "}}")
            }
            Value::Function(func) => write!(f, "[function {}]", func.name()),
        }
    }
}

/// Serializes with JSON-stringify rules.
///
/// Undefined values and functions are skipped inside maps and written as
/// `null` inside lists or at the top level. Non-finite floats are written as
/// `null`.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Float(_) => serializer.serialize_unit(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let kept = map.iter().filter(|(_, v)| is_serializable_entry(v));
                let mut out = serializer.serialize_map(None)?;
                for (key, item) in kept {
                    out.serialize_entry(key, item)?;
                }
                out.end()
            }
        }
    }
}

/// Map entries JSON serialization keeps.
pub(crate) fn is_serializable_entry(value: &Value) -> bool {
    !matches!(value, Value::Undefined | Value::Function(_))
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::Function(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

fn mismatch(expected: &str, value: &Value) -> StructureError {
    StructureError::TypeMismatch {
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

impl TryFrom<&Value> for String {
    type Error = StructureError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(mismatch("String", value)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = StructureError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(mismatch("&str", value)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = StructureError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(mismatch("i64", value)),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = StructureError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or_else(|| mismatch("f64", value))
    }
}

impl TryFrom<&Value> for bool {
    type Error = StructureError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(mismatch("bool", value)),
        }
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
