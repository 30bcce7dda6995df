//! Core diff engine implementation.
//! Walks two values depth-first and collects change records in pre-order.

use super::equality::{compute_operation, needs_recursion};
use super::schema::ChangeRecord;
use crate::path::{render, Path, Segment};
use crate::value::Value;
use indexmap::IndexSet;
use log::{debug, trace};

/// Compute the ordered list of changes turning `before` into `after`
///
/// # Arguments
/// * `before` - The earlier snapshot
/// * `after` - The later snapshot
///
/// # Returns
/// Change records in traversal order. Within one container, keys of `before`
/// come first in their own order, followed by keys only `after` has.
///
/// # Example
/// ```ignore
/// use recursive_diff::{diff, Value};
/// use serde_json::json;
///
/// let before = Value::from(json!({"a": 1}));
/// let after = Value::from(json!({"a": 2}));
/// let changes = diff(&before, &after);
/// assert_eq!(changes[0].path_string().as_deref(), Some("a"));
/// ```
pub fn diff<'a>(before: &'a Value, after: &'a Value) -> Vec<ChangeRecord<'a>> {
    debug!("Diffing {} against {}", before.kind(), after.kind());

    let mut records = Vec::new();
    let mut path = Vec::new();
    diff_recursive(before, after, &mut path, &mut records);

    debug!("Diff produced {} change records", records.len());
    records
}

fn diff_recursive<'a>(
    before: &'a Value,
    after: &'a Value,
    path: &mut Vec<Segment>,
    records: &mut Vec<ChangeRecord<'a>>,
) {
    if !needs_recursion(before, after) {
        make_diff(before, after, path, records);
        return;
    }

    for key in key_union(before, after) {
        let child_before = before.member(&key);
        let child_after = after.member(&key);
        path.push(key);
        diff_recursive(child_before, child_after, path, records);
        path.pop();
    }
}

/// Emit at most one record for a leaf pair
fn make_diff<'a>(
    before: &'a Value,
    after: &'a Value,
    path: &[Segment],
    records: &mut Vec<ChangeRecord<'a>>,
) {
    let Some(operation) = compute_operation(before, after) else {
        return;
    };

    trace!("{} at {}", operation, render(path));
    records.push(ChangeRecord::new(
        operation,
        Path::from_segments(path.to_vec()),
        before,
        after,
    ));
}

/// Keys of `before` in order, then keys only `after` has
fn key_union(before: &Value, after: &Value) -> IndexSet<Segment> {
    let mut keys: IndexSet<Segment> = before.keys().into_iter().collect();
    keys.extend(after.keys());
    keys
}
