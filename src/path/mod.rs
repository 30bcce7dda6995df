//! Dotted paths into nested values.
//!
//! This module handles:
//! - The path object (a non-empty list of key/index segments)
//! - Parsing and rendering dotted path strings
//! - Resolving a path against a value (`get_value_by_path`)
//!
//! The root of a value has no path: it is addressed with `None`, never with an
//! empty string or an empty `Path`.

pub mod lookup;
pub mod segment;

use crate::utils::config::{PATH_SEPARATOR, ROOT_PATH_LABEL};
use crate::utils::error::PathError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// Re-export main types and functions
pub use lookup::get_value_by_path;
pub use segment::Segment;

/// A non-empty sequence of segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Build a path from segments, `None` for the root
    pub fn from_segments(segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Parse a dotted path string
    ///
    /// The empty string addresses the root and yields `Ok(None)`.
    ///
    /// # Errors
    /// * `PathError::EmptySegment` - Two separators in a row, or a leading/trailing separator
    pub fn parse(raw: &str) -> Result<Option<Self>, PathError> {
        if raw.is_empty() {
            return Ok(None);
        }

        let segments = raw
            .split(PATH_SEPARATOR)
            .enumerate()
            .map(|(position, part)| {
                if part.is_empty() {
                    Err(PathError::EmptySegment(position))
                } else {
                    Ok(Segment::parse(part))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_segments(segments))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Extend the path by one segment
    pub fn child(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Path of the enclosing container, `None` when that container is the root
    pub fn parent(&self) -> Option<Self> {
        Self::from_segments(self.segments[..self.segments.len() - 1].to_vec())
    }

    pub fn last(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// Render the first `len` segments, or the root label when `len` is zero
    pub(crate) fn render_prefix(&self, len: usize) -> String {
        render(&self.segments[..len.min(self.segments.len())])
    }
}

/// Render segments joined by the separator, or the root label for none
pub(crate) fn render(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return ROOT_PATH_LABEL.to_string();
    }
    segments
        .iter()
        .map(|segment| segment.to_string())
        .collect::<Vec<_>>()
        .join(&PATH_SEPARATOR.to_string())
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.segments))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Path::parse(raw)?.ok_or(PathError::EmptySegment(0))
    }
}

impl From<Segment> for Path {
    fn from(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
        }
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_mixed_segments() {
        let path: Path = "nested.list.1.name".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("nested".to_string()),
                Segment::Key("list".to_string()),
                Segment::Index(1),
                Segment::Key("name".to_string()),
            ]
        );
        assert_eq!(path.to_string(), "nested.list.1.name");
    }

    #[test]
    fn test_empty_string_is_root() {
        assert_eq!(Path::parse("").unwrap(), None);
        assert!("".parse::<Path>().is_err());
    }

    #[test]
    fn test_empty_segment_rejected() {
        assert_eq!(Path::parse("a..b"), Err(PathError::EmptySegment(1)));
        assert_eq!(Path::parse("a."), Err(PathError::EmptySegment(1)));
        assert_eq!(Path::parse(".a"), Err(PathError::EmptySegment(0)));
    }

    #[test]
    fn test_no_empty_path_object() {
        assert_eq!(Path::from_segments(Vec::new()), None);
    }

    #[test]
    fn test_child_and_parent() {
        let path = Path::from(Segment::from("list")).child(3);
        assert_eq!(path.to_string(), "list.3");
        assert_eq!(path.last(), &Segment::Index(3));
        assert_eq!(path.parent().map(|p| p.to_string()), Some("list".to_string()));
        assert_eq!(Path::from(Segment::from("list")).parent(), None);
    }

    #[test]
    fn test_render_prefix() {
        let path: Path = "a.b.c".parse().unwrap();
        assert_eq!(path.render_prefix(0), ROOT_PATH_LABEL);
        assert_eq!(path.render_prefix(2), "a.b");
    }

    #[test]
    fn test_serde_as_string() {
        let path: Path = "list.2".parse().unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"list.2\"");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
