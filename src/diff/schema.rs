//! Schema definitions for change records.
//!
//! Defines the records the engine emits and their serialized shape.

use crate::path::Path;
use crate::utils::config::ROOT_PATH_LABEL;
use crate::value::Value;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Kind of change at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Present only in `after`
    Add,
    /// Present on both sides with unequal values
    Update,
    /// Present only in `before`
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected change
///
/// Values borrow from the diffed inputs. Use [`ChangeRecord::into_owned`] to
/// keep a record after the inputs are gone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeRecord<'a> {
    /// What happened at `path`
    pub operation: Operation,

    /// Location of the change, `None` for the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,

    /// Value in the first snapshot, absent for `add`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Cow<'a, Value>>,

    /// Value in the second snapshot, absent for `delete`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Cow<'a, Value>>,
}

impl<'a> ChangeRecord<'a> {
    /// Build a record, keeping only the sides the operation carries
    pub(crate) fn new(
        operation: Operation,
        path: Option<Path>,
        before: &'a Value,
        after: &'a Value,
    ) -> Self {
        let before = match operation {
            Operation::Add => None,
            Operation::Update | Operation::Delete => Some(Cow::Borrowed(before)),
        };
        let after = match operation {
            Operation::Delete => None,
            Operation::Add | Operation::Update => Some(Cow::Borrowed(after)),
        };

        Self {
            operation,
            path,
            before,
            after,
        }
    }

    /// Rendered path, `None` for the root
    pub fn path_string(&self) -> Option<String> {
        self.path.as_ref().map(|path| path.to_string())
    }

    pub fn before(&self) -> Option<&Value> {
        self.before.as_deref()
    }

    pub fn after(&self) -> Option<&Value> {
        self.after.as_deref()
    }

    /// Detach the record from the diffed inputs
    pub fn into_owned(self) -> ChangeRecord<'static> {
        ChangeRecord {
            operation: self.operation,
            path: self.path,
            before: self.before.map(|value| Cow::Owned(value.into_owned())),
            after: self.after.map(|value| Cow::Owned(value.into_owned())),
        }
    }
}

/// One audit-log line, e.g. `update nested.b: 2 -> 3`
impl fmt::Display for ChangeRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.operation)?;
        match &self.path {
            Some(path) => write!(f, "{}", path)?,
            None => f.write_str(ROOT_PATH_LABEL)?,
        }
        match (self.before(), self.after()) {
            (Some(before), Some(after)) => write!(f, ": {} -> {}", before, after),
            (Some(before), None) => write!(f, ": {}", before),
            (None, Some(after)) => write!(f, ": {}", after),
            (None, None) => Ok(()),
        }
    }
}
