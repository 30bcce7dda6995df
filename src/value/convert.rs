//! Conversions into and out of `Value`.

use super::{FileRef, Function, Map, Symbol, Value};
use crate::projection::{AtomicKind, Shape, ShapeKind, Shaped};
use crate::utils::error::ValueError;
use chrono::{DateTime, SecondsFormat, Utc};
use log::trace;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Convert any serializable data into a `Value`
///
/// The conversion goes through `serde_json`, so dates serialized by chrono
/// arrive as strings and `None` arrives as `null`. Use [`to_value_shaped`]
/// to keep dates and files atomic.
///
/// # Errors
/// * `ValueError::Serialization` - The data cannot be represented as JSON
///
/// # Example
/// ```ignore
/// let before = to_value(&order)?;
/// let after = to_value(&edited_order)?;
/// let changes = diff(&before, &after);
/// ```
pub fn to_value<T: Serialize + ?Sized>(data: &T) -> Result<Value, ValueError> {
    Ok(serde_json::to_value(data)?.into())
}

/// Convert typed data into a `Value`, restoring dates and files from its shape
///
/// Like [`to_value`], then every position the shape of `T` declares as a date
/// or a file is turned back into `Value::Date` / `Value::File`, so dates
/// compare by epoch milliseconds and files stay atomic.
///
/// # Errors
/// * `ValueError::Serialization` - The data cannot be represented as JSON
///
/// # Example
/// ```ignore
/// let before = to_value_shaped(&order)?;
/// assert!(Shape::of::<Order>().admits(&before));
/// ```
pub fn to_value_shaped<T: Serialize + Shaped + ?Sized>(data: &T) -> Result<Value, ValueError> {
    let value = to_value(data)?;
    Ok(restore(value, &T::shape()))
}

/// Rebuild atomic values serde flattened into strings and objects
///
/// Positions that do not fit the shape are left as they are.
fn restore(value: Value, shape: &Shape) -> Value {
    match (&shape.kind, value) {
        (ShapeKind::Optional(_), value @ (Value::Undefined | Value::Null)) => value,
        (ShapeKind::Optional(inner), value) => restore(value, &inner()),
        (ShapeKind::Atomic(AtomicKind::Date), Value::String(raw)) => {
            match DateTime::parse_from_rfc3339(&raw) {
                Ok(date) => Value::Date(date.with_timezone(&Utc)),
                Err(err) => {
                    trace!("Keeping {:?} as a string: {}", raw, err);
                    Value::String(raw)
                }
            }
        }
        (ShapeKind::Atomic(AtomicKind::File), value @ Value::Object(_)) => {
            match serde_json::to_value(&value).and_then(serde_json::from_value::<FileRef>) {
                Ok(file) => Value::File(file),
                Err(err) => {
                    trace!("Keeping file-shaped object as is: {}", err);
                    value
                }
            }
        }
        (ShapeKind::Array(item), Value::Array(items)) => {
            let item = item();
            Value::Array(items.into_iter().map(|value| restore(value, &item)).collect())
        }
        (ShapeKind::Tuple(positions), Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, value)| match positions.get(index) {
                    Some(position) => restore(value, &position()),
                    None => value,
                })
                .collect(),
        ),
        (ShapeKind::Map(item), Value::Object(entries)) => {
            let item = item();
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, restore(value, &item)))
                    .collect(),
            )
        }
        (ShapeKind::Object(fields), Value::Object(entries)) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| {
                    let value = match fields.iter().find(|field| field.name == key.as_str()) {
                        Some(field) => restore(value, &(field.shape)()),
                        None => value,
                    };
                    (key, value)
                })
                .collect(),
        ),
        (_, value) => value,
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl From<FileRef> for Value {
    fn from(file: FileRef) -> Self {
        Value::File(file)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::BigInt(n) => serializer.serialize_i128(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Symbol(symbol) => match &symbol.description {
                Some(description) => serializer.serialize_str(description),
                None => serializer.serialize_none(),
            },
            Value::Date(date) => {
                serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::File(file) => file.serialize(serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Integral numbers serialize as integers so `1` does not become `1.0`
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}
