//! Path/value projection over static shapes.
//!
//! Given the shape of a value, this module answers two questions without
//! touching any runtime data:
//! - which paths can address something inside it (`Shape::paths`)
//! - what shape is found at a given path (`Shape::resolve`)
//!
//! The answers agree with the diff engine: for inputs admitted by a shape,
//! every path a change record carries is accepted by that shape, and
//! resolving it yields the shape of the compared values.
//!
//! # Example
//! ```ignore
//! let shape = Shape::of::<Vec<(String, u32)>>();
//! assert_eq!(shape.path_strings(), vec!["*", "*.0", "*.1"]);
//! ```

pub mod paths;
pub mod resolve;
pub mod shape;

// Re-export main types
pub use paths::{PathPattern, PatternSegment};
pub use shape::{AtomicKind, Field, ObjectShape, Shape, ShapeFn, ShapeKind, Shaped};
