//! Structural diff of two values.
//!
//! This module compares two snapshots (before vs after) and produces an
//! ordered list of add/update/delete records, each located by a dotted path.
//!
//! # Example
//! ```ignore
//! use recursive_diff::diff::{diff, summarize};
//!
//! let changes = diff(&before, &after);
//! for change in &changes {
//!     log::info!("{}", change);
//! }
//! println!("{}", summarize(&changes));
//! ```

mod engine;
pub mod equality;
mod schema;
mod summary;

// Public API exports
pub use engine::diff;
pub use equality::{are_equal, compute_operation, needs_recursion};
pub use schema::{ChangeRecord, Operation};
pub use summary::{summarize, ChangeSummary};
