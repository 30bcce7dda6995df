//! Classification of values into kinds.
//!
//! Two classifications exist side by side:
//! - `Kind` decides whether a pair of values is recursed into
//! - `type_of` mirrors the coarser `typeof` names used by the equality policy

use super::Value;
use crate::utils::config::VALUE_OBJECT_KINDS;
use serde::Serialize;
use std::fmt;

/// Traversal kind of a value
///
/// Arrays and plain objects share [`Kind::Object`]. Dates, files and `null`
/// are value objects: their `typeof` is `"object"` but they are atomic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Date,
    File,
    Object,
}

impl Kind {
    /// Classify a value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Function(_) => Kind::Function,
            Value::Date(_) => Kind::Date,
            Value::File(_) => Kind::File,
            Value::Array(_) | Value::Object(_) => Kind::Object,
        }
    }

    /// Lowercase name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::BigInt => "bigint",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Function => "function",
            Kind::Date => "date",
            Kind::File => "file",
            Kind::Object => "object",
        }
    }

    /// Whether this kind is an atomic value whose `typeof` is still `"object"`
    pub fn is_value_object(self) -> bool {
        VALUE_OBJECT_KINDS.contains(&self.as_str())
    }

    /// The `typeof` name of values of this kind
    pub fn type_of(self) -> &'static str {
        if self.is_value_object() {
            Kind::Object.as_str()
        } else {
            self.as_str()
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `typeof` name of a value
pub fn type_of(value: &Value) -> &'static str {
    Kind::of(value).type_of()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FileRef, Function, Symbol};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_arrays_and_objects_share_kind() {
        assert_eq!(Kind::of(&Value::Array(vec![])), Kind::Object);
        assert_eq!(Kind::of(&Value::Object(Default::default())), Kind::Object);
    }

    #[test]
    fn test_value_objects_report_object_typeof() {
        let date = Value::Date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let file = Value::File(FileRef {
            name: "a.txt".to_string(),
            size: 1,
            content_type: "text/plain".to_string(),
            last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        });

        assert_eq!(Kind::of(&Value::Null), Kind::Null);
        assert_eq!(Kind::of(&date), Kind::Date);
        assert_eq!(Kind::of(&file), Kind::File);
        assert_eq!(type_of(&Value::Null), "object");
        assert_eq!(type_of(&date), "object");
        assert_eq!(type_of(&file), "object");
    }

    #[test]
    fn test_scalar_typeof() {
        assert_eq!(type_of(&Value::Undefined), "undefined");
        assert_eq!(type_of(&Value::Bool(true)), "boolean");
        assert_eq!(type_of(&Value::Number(1.0)), "number");
        assert_eq!(type_of(&Value::BigInt(1)), "bigint");
        assert_eq!(type_of(&Value::String(String::new())), "string");
        assert_eq!(type_of(&Value::Symbol(Symbol::new("s"))), "symbol");
        assert_eq!(type_of(&Value::Function(Function::new("f"))), "function");
    }
}
