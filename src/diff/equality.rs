//! Leaf equality policy and operation selection.

use super::schema::Operation;
use crate::utils::config::IGNORED_TYPES;
use crate::value::kind::type_of;
use crate::value::{Kind, Value};

/// Check whether two leaf values are equal
///
/// Rules, first match wins:
/// 1. either side's `typeof` is in `IGNORED_TYPES` → equal
/// 2. different `typeof` → unequal
/// 3. both dates → equal iff same epoch milliseconds
/// 4. `before` is `null` → equal
/// 5. otherwise strict equality (numbers by IEEE `==`, so `NaN` is never equal)
///
/// Rule 4 makes `null` before anything of `typeof "object"` equal, while the
/// reverse order is an update.
pub fn are_equal(before: &Value, after: &Value) -> bool {
    let type_before = type_of(before);
    let type_after = type_of(after);

    if IGNORED_TYPES.contains(&type_before) || IGNORED_TYPES.contains(&type_after) {
        return true;
    }
    if type_before != type_after {
        return false;
    }

    match (before, after) {
        (Value::Date(b), Value::Date(a)) => b.timestamp_millis() == a.timestamp_millis(),
        (Value::Null, _) => true,
        _ => before == after,
    }
}

/// Decide which operation, if any, a leaf pair produces
///
/// `None` is the transient "same" state: nothing is emitted.
pub fn compute_operation(before: &Value, after: &Value) -> Option<Operation> {
    match (before.is_undefined(), after.is_undefined()) {
        (true, false) => Some(Operation::Add),
        (false, true) => Some(Operation::Delete),
        _ if !are_equal(before, after) => Some(Operation::Update),
        _ => None,
    }
}

/// Whether a pair is traversed key by key instead of compared as a leaf
pub fn needs_recursion(before: &Value, after: &Value) -> bool {
    before.kind() == Kind::Object && after.kind() == Kind::Object
}
