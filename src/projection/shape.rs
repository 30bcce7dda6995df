//! Static shape descriptions and the `Shaped` trait.
//!
//! Child shapes are stored as `fn() -> Shape` thunks and only built when a
//! walk reaches them, so self-referential types describe themselves without
//! looping.

use crate::value::{FileRef, Function, Symbol, Value, UNDEFINED};
use chrono::{DateTime, TimeZone};
use std::any::type_name;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;

/// Lazily built child shape
pub type ShapeFn = fn() -> Shape;

/// Structure of a value as seen by the path projection
#[derive(Clone)]
pub struct Shape {
    /// Identity of the described type, used to detect recursion
    pub id: &'static str,
    pub kind: ShapeKind,
}

#[derive(Clone)]
pub enum ShapeKind {
    /// Never descended into
    Atomic(AtomicKind),
    /// `T | undefined`, transparent for paths
    Optional(ShapeFn),
    /// Homogeneous sequence addressed by any index
    Array(ShapeFn),
    /// Fixed positions, each with its own shape
    Tuple(Vec<ShapeFn>),
    /// String-keyed map addressed by any key
    Map(ShapeFn),
    /// Named fields in declaration order
    Object(Vec<Field>),
}

/// Atomic shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Date,
    File,
}

/// A named field of an object shape
#[derive(Clone)]
pub struct Field {
    pub name: &'static str,
    pub shape: ShapeFn,
}

impl Shape {
    /// Shape of a type
    pub fn of<T: Shaped + ?Sized>() -> Shape {
        T::shape()
    }

    pub fn atomic<T: ?Sized>(kind: AtomicKind) -> Shape {
        Shape {
            id: type_name::<T>(),
            kind: ShapeKind::Atomic(kind),
        }
    }

    pub fn optional<T: Shaped>() -> Shape {
        Shape {
            id: type_name::<Option<T>>(),
            kind: ShapeKind::Optional(T::shape),
        }
    }

    pub fn array<T: Shaped>() -> Shape {
        Shape {
            id: type_name::<[T]>(),
            kind: ShapeKind::Array(T::shape),
        }
    }

    pub fn map<V: Shaped>() -> Shape {
        Shape {
            id: type_name::<HashMap<String, V>>(),
            kind: ShapeKind::Map(V::shape),
        }
    }

    /// Strip `Optional` wrappers
    pub fn unwrap_optional(&self) -> Shape {
        let mut shape = self.clone();
        while let ShapeKind::Optional(inner) = shape.kind {
            shape = inner();
        }
        shape
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.unwrap_optional().kind, ShapeKind::Atomic(_))
    }

    /// Check that a runtime value has this shape
    ///
    /// Objects must not carry keys the shape lacks; absent fields read as
    /// `undefined`, which only optional shapes admit.
    pub fn admits(&self, value: &Value) -> bool {
        match (&self.kind, value) {
            (ShapeKind::Optional(_), Value::Undefined | Value::Null) => true,
            (ShapeKind::Optional(inner), _) => inner().admits(value),
            (ShapeKind::Atomic(kind), _) => kind.admits(value),
            (ShapeKind::Array(item), Value::Array(items)) => {
                let item = item();
                items.iter().all(|value| item.admits(value))
            }
            (ShapeKind::Tuple(items), Value::Array(values)) => {
                items.len() == values.len()
                    && items.iter().zip(values).all(|(item, value)| item().admits(value))
            }
            (ShapeKind::Map(item), Value::Object(entries)) => {
                let item = item();
                entries.values().all(|value| item.admits(value))
            }
            (ShapeKind::Object(fields), Value::Object(entries)) => {
                entries
                    .keys()
                    .all(|key| fields.iter().any(|field| field.name == key.as_str()))
                    && fields.iter().all(|field| {
                        (field.shape)().admits(entries.get(field.name).unwrap_or(&UNDEFINED))
                    })
            }
            _ => false,
        }
    }
}

impl AtomicKind {
    fn admits(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (AtomicKind::Null, Value::Null)
                | (AtomicKind::Boolean, Value::Bool(_))
                | (AtomicKind::Number, Value::Number(_))
                | (AtomicKind::BigInt, Value::BigInt(_))
                | (AtomicKind::String, Value::String(_))
                | (AtomicKind::Symbol, Value::Symbol(_))
                | (AtomicKind::Function, Value::Function(_))
                | (AtomicKind::Date, Value::Date(_))
                | (AtomicKind::File, Value::File(_))
        )
    }
}

/// Shapes are identified by the type they describe
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shape {}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shape").field(&self.id).finish()
    }
}

/// Builder for object shapes
///
/// # Example
/// ```ignore
/// impl Shaped for Customer {
///     fn shape() -> Shape {
///         ObjectShape::new::<Self>()
///             .field::<String>("name")
///             .field::<Option<String>>("email")
///             .build()
///     }
/// }
/// ```
pub struct ObjectShape {
    id: &'static str,
    fields: Vec<Field>,
}

impl ObjectShape {
    pub fn new<T: ?Sized>() -> Self {
        Self {
            id: type_name::<T>(),
            fields: Vec::new(),
        }
    }

    pub fn field<F: Shaped + ?Sized>(mut self, name: &'static str) -> Self {
        self.fields.push(Field {
            name,
            shape: F::shape,
        });
        self
    }

    pub fn build(self) -> Shape {
        Shape {
            id: self.id,
            kind: ShapeKind::Object(self.fields),
        }
    }
}

/// Types with a static shape
pub trait Shaped {
    fn shape() -> Shape;
}

macro_rules! impl_shaped_atomic {
    ($kind:ident => $($ty:ty),*) => {
        $(
            impl Shaped for $ty {
                fn shape() -> Shape {
                    Shape::atomic::<$ty>(AtomicKind::$kind)
                }
            }
        )*
    };
}

impl_shaped_atomic!(Boolean => bool);
impl_shaped_atomic!(Number => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_shaped_atomic!(BigInt => i128, u128);
impl_shaped_atomic!(String => str, String, char);
impl_shaped_atomic!(Null => ());
impl_shaped_atomic!(Symbol => Symbol);
impl_shaped_atomic!(Function => Function);
impl_shaped_atomic!(File => FileRef);

impl<Tz: TimeZone> Shaped for DateTime<Tz> {
    fn shape() -> Shape {
        Shape::atomic::<DateTime<Tz>>(AtomicKind::Date)
    }
}

impl<T: Shaped + ?Sized> Shaped for &T {
    fn shape() -> Shape {
        T::shape()
    }
}

impl<T: Shaped + ?Sized> Shaped for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }
}

impl<T: Shaped> Shaped for Option<T> {
    fn shape() -> Shape {
        Shape::optional::<T>()
    }
}

impl<T: Shaped> Shaped for [T] {
    fn shape() -> Shape {
        Shape::array::<T>()
    }
}

impl<T: Shaped, const N: usize> Shaped for [T; N] {
    fn shape() -> Shape {
        Shape::array::<T>()
    }
}

impl<T: Shaped> Shaped for Vec<T> {
    fn shape() -> Shape {
        Shape::array::<T>()
    }
}

impl<T: Shaped> Shaped for VecDeque<T> {
    fn shape() -> Shape {
        Shape::array::<T>()
    }
}

impl<V: Shaped, S> Shaped for HashMap<String, V, S> {
    fn shape() -> Shape {
        Shape::map::<V>()
    }
}

impl<V: Shaped> Shaped for BTreeMap<String, V> {
    fn shape() -> Shape {
        Shape::map::<V>()
    }
}

impl<V: Shaped, S> Shaped for indexmap::IndexMap<String, V, S> {
    fn shape() -> Shape {
        Shape::map::<V>()
    }
}

macro_rules! impl_shaped_tuple {
    ($($name:ident),+) => {
        impl<$($name: Shaped),+> Shaped for ($($name,)+) {
            fn shape() -> Shape {
                Shape {
                    id: type_name::<Self>(),
                    kind: ShapeKind::Tuple(vec![$(<$name as Shaped>::shape as ShapeFn),+]),
                }
            }
        }
    };
}

impl_shaped_tuple!(A);
impl_shaped_tuple!(A, B);
impl_shaped_tuple!(A, B, C);
impl_shaped_tuple!(A, B, C, D);
