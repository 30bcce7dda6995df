//! Dynamic value model the diff engine operates on.
//!
//! This module handles:
//! - The closed set of value kinds (`Value`)
//! - Kind classification and `typeof` names
//! - Conversions from Rust data and `serde_json::Value`
//! - Own-property lookup used by traversal and path resolution

pub mod convert;
pub mod kind;

use crate::path::Segment;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export main types
pub use convert::{to_value, to_value_shaped};
pub use kind::Kind;

/// Insertion-ordered object map
pub type Map = IndexMap<String, Value>;

/// Shared `undefined` returned for missing properties
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// A dynamically typed value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value (missing property, unset slot)
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Date(DateTime<Utc>),
    File(FileRef),
    Array(Vec<Value>),
    Object(Map),
}

/// An opaque symbol. Symbols are never compared by the diff engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub description: Option<String>,
}

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }
}

/// An opaque callable. Functions are never compared by the diff engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    pub name: String,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Descriptor of an uploaded or attached file
///
/// Files are atomic: two descriptors are equal when every field matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub last_modified: DateTime<Utc>,
}

impl Value {
    /// Kind used to decide between recursion and leaf comparison
    pub fn kind(&self) -> Kind {
        Kind::of(self)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Look up an own property.
    ///
    /// Objects answer key segments and the decimal form of index segments,
    /// arrays answer index segments only. Every other value has no own
    /// properties.
    pub fn get(&self, segment: &Segment) -> Option<&Value> {
        match (self, segment) {
            (Value::Object(map), Segment::Key(key)) => map.get(key),
            (Value::Object(map), Segment::Index(index)) => map.get(&index.to_string()),
            (Value::Array(items), Segment::Index(index)) => items.get(*index),
            _ => None,
        }
    }

    /// Like [`Value::get`], reading a missing property as `undefined`
    pub fn member(&self, segment: &Segment) -> &Value {
        self.get(segment).unwrap_or(&UNDEFINED)
    }

    /// Own enumerable keys in enumeration order
    pub fn keys(&self) -> Vec<Segment> {
        match self {
            Value::Object(map) => map.keys().map(|key| Segment::parse(key)).collect(),
            Value::Array(items) => (0..items.len()).map(Segment::Index).collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(symbol) => match &symbol.description {
                Some(description) => write!(f, "Symbol({})", description),
                None => write!(f, "Symbol()"),
            },
            Value::Function(func) => write!(f, "[Function {}]", func.name),
            Value::Date(date) => write!(f, "{}", date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::File(file) => write!(f, "File({})", file.name),
            Value::Array(_) | Value::Object(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
        }
    }
}
