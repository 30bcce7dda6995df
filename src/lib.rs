//! Recursive Diff
//!
//! Structural diffing of nested values into ordered change records.
//!
//! Two snapshots of application data (objects, arrays, tuples, primitives,
//! dates, files) are compared and every difference is reported as an
//! `add`, `update` or `delete` record located by a dotted path such as
//! `nested.list.2`.
//!
//! ## Getting Started
//!
//! ```ignore
//! use recursive_diff::{diff, get_value_by_path, Value};
//! use serde_json::json;
//!
//! let before = Value::from(json!({"list": [1, 2, 3]}));
//! let after = Value::from(json!({"list": [1, 2, 4]}));
//!
//! for change in diff(&before, &after) {
//!     println!("{}", change); // update list.2: 3 -> 4
//! }
//!
//! let third = get_value_by_path(&after, Some("list.2"))?;
//! ```
//!
//! Typed data enters through [`to_value`], or [`to_value_shaped`] when it
//! holds dates or files; its static structure can be
//! described with [`Shaped`] to enumerate and check the paths a diff may
//! report.

pub mod diff;
pub mod path;
pub mod projection;
pub mod utils;
pub mod value;

pub use diff::{diff, summarize, ChangeRecord, ChangeSummary, Operation};
pub use path::{get_value_by_path, Path, Segment};
pub use projection::{ObjectShape, PathPattern, Shape, Shaped};
pub use utils::{PathError, ValueError};
pub use value::{to_value, to_value_shaped, FileRef, Function, Kind, Map, Symbol, Value};
