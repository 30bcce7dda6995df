//! Resolve paths against values.

use super::Path;
use crate::utils::error::PathError;
use crate::value::Value;
use log::{debug, trace};

/// Return the value found by walking a dotted path from `root`
///
/// **Public** - inverse of the paths emitted by `diff`
///
/// # Arguments
/// * `root` - Value to start from
/// * `path` - Dotted path; `None` or `""` return `root` unchanged
///
/// # Returns
/// The value at the path. A key missing on an existing value reads as
/// `undefined`.
///
/// # Errors
/// * `PathError::EmptySegment` - The path string is malformed
/// * `PathError::Unreachable` - A segment is read from `undefined` or `null`
///
/// # Example
/// ```ignore
/// for change in diff(&before, &after) {
///     let current = get_value_by_path(&after, change.path_string().as_deref())?;
/// }
/// ```
pub fn get_value_by_path<'a>(root: &'a Value, path: Option<&str>) -> Result<&'a Value, PathError> {
    let path = match path {
        Some(raw) => Path::parse(raw)?,
        None => None,
    };
    root.get_path(path.as_ref())
}

impl Value {
    /// Walk a parsed path from this value, see [`get_value_by_path`]
    pub fn get_path(&self, path: Option<&Path>) -> Result<&Value, PathError> {
        let Some(path) = path else {
            return Ok(self);
        };

        debug!("Resolving path: {}", path);

        let mut current = self;
        for (position, segment) in path.segments().iter().enumerate() {
            if current.is_undefined() || current.is_null() {
                return Err(PathError::Unreachable {
                    path: path.render_prefix(position),
                    segment: segment.to_string(),
                });
            }
            current = current.member(segment);
            trace!("  {} -> {}", segment, current.kind());
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        Value::from(json!({
            "nested": {
                "list": [{"1": "test"}, {"2": "before"}, 3],
                "flag": null
            }
        }))
    }

    #[test]
    fn test_root_for_absent_or_empty_path() {
        let root = sample();
        assert_eq!(get_value_by_path(&root, None).unwrap(), &root);
        assert_eq!(get_value_by_path(&root, Some("")).unwrap(), &root);
    }

    #[test]
    fn test_walks_keys_and_indices() {
        let root = sample();
        assert_eq!(
            get_value_by_path(&root, Some("nested.list.1.2")).unwrap(),
            &Value::from("before")
        );
        assert_eq!(
            get_value_by_path(&root, Some("nested.list.2")).unwrap(),
            &Value::from(3)
        );
    }

    #[test]
    fn test_missing_leaf_is_undefined() {
        let root = sample();
        assert!(get_value_by_path(&root, Some("nested.missing"))
            .unwrap()
            .is_undefined());
        assert!(get_value_by_path(&root, Some("nested.list.9"))
            .unwrap()
            .is_undefined());
    }

    #[test]
    fn test_stepping_through_missing_value_fails() {
        let root = sample();
        let err = get_value_by_path(&root, Some("nested.missing.deeper")).unwrap_err();
        assert_eq!(
            err,
            PathError::Unreachable {
                path: "nested.missing".to_string(),
                segment: "deeper".to_string(),
            }
        );
    }

    #[test]
    fn test_stepping_through_null_fails() {
        let root = sample();
        assert!(get_value_by_path(&root, Some("nested.flag.x")).is_err());
    }

    #[test]
    fn test_malformed_path_fails() {
        let root = sample();
        assert_eq!(
            get_value_by_path(&root, Some("nested..list")),
            Err(PathError::EmptySegment(1))
        );
    }
}
