//! Enumeration of the path patterns a shape can address.
//!
//! # Traversal order
//!
//! Depth-first, declaration order: object fields in the order they were
//! declared, tuple positions in ascending order. A pattern is listed before
//! the patterns beneath it.
//!
//! # Recursion guard
//!
//! A shape already on the current chain of ancestors is listed but not
//! expanded again, so recursive types yield a finite pattern set.

use super::shape::{Shape, ShapeKind};
use crate::path::{Path, Segment};
use crate::utils::config::{ANY_INDEX_SEGMENT, ANY_KEY_SEGMENT, PATH_SEPARATOR};
use std::fmt;

/// One segment of a path pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternSegment {
    /// Exactly this key
    Key(String),
    /// Exactly this index (tuple positions)
    Index(usize),
    /// Any array index
    AnyIndex,
    /// Any map key
    AnyKey,
}

impl PatternSegment {
    pub fn matches(&self, segment: &Segment) -> bool {
        match (self, segment) {
            (PatternSegment::Key(expected), Segment::Key(key)) => expected == key,
            (PatternSegment::Index(expected), Segment::Index(index)) => expected == index,
            (PatternSegment::AnyIndex, Segment::Index(_)) => true,
            (PatternSegment::AnyKey, _) => true,
            _ => false,
        }
    }
}

impl From<Segment> for PatternSegment {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Key(key) => PatternSegment::Key(key),
            Segment::Index(index) => PatternSegment::Index(index),
        }
    }
}

impl fmt::Display for PatternSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSegment::Key(key) => f.write_str(key),
            PatternSegment::Index(index) => write!(f, "{}", index),
            PatternSegment::AnyIndex => f.write_str(ANY_INDEX_SEGMENT),
            PatternSegment::AnyKey => f.write_str(ANY_KEY_SEGMENT),
        }
    }
}

/// A non-empty path whose segments may be wildcards
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    segments: Vec<PatternSegment>,
}

impl PathPattern {
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Whether a concrete path is an instance of this pattern
    pub fn matches(&self, path: &Path) -> bool {
        self.segments.len() == path.depth()
            && self
                .segments
                .iter()
                .zip(path.segments())
                .all(|(pattern, segment)| pattern.matches(segment))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        f.write_str(&rendered.join(&PATH_SEPARATOR.to_string()))
    }
}

impl Shape {
    /// Every non-root pattern reachable from this shape
    ///
    /// The root (`None`) is always addressable and is not listed.
    pub fn paths(&self) -> Vec<PathPattern> {
        let mut patterns = Vec::new();
        let mut prefix = Vec::new();
        let mut ancestors = Vec::new();
        walk(self, &mut prefix, &mut ancestors, &mut patterns);
        patterns
    }

    /// Rendered form of [`Shape::paths`]
    pub fn path_strings(&self) -> Vec<String> {
        self.paths().iter().map(|p| p.to_string()).collect()
    }
}

fn walk(
    shape: &Shape,
    prefix: &mut Vec<PatternSegment>,
    ancestors: &mut Vec<&'static str>,
    patterns: &mut Vec<PathPattern>,
) {
    let shape = shape.unwrap_optional();
    if ancestors.contains(&shape.id) {
        return;
    }

    ancestors.push(shape.id);
    match &shape.kind {
        ShapeKind::Atomic(_) | ShapeKind::Optional(_) => {}
        ShapeKind::Array(item) => {
            visit(PatternSegment::AnyIndex, &item(), prefix, ancestors, patterns);
        }
        ShapeKind::Tuple(items) => {
            for (index, item) in items.iter().enumerate() {
                visit(PatternSegment::Index(index), &item(), prefix, ancestors, patterns);
            }
        }
        ShapeKind::Map(item) => {
            visit(PatternSegment::AnyKey, &item(), prefix, ancestors, patterns);
        }
        ShapeKind::Object(fields) => {
            for field in fields {
                let segment = PatternSegment::from(Segment::parse(field.name));
                visit(segment, &(field.shape)(), prefix, ancestors, patterns);
            }
        }
    }
    ancestors.pop();
}

fn visit(
    segment: PatternSegment,
    child: &Shape,
    prefix: &mut Vec<PatternSegment>,
    ancestors: &mut Vec<&'static str>,
    patterns: &mut Vec<PathPattern>,
) {
    prefix.push(segment);
    patterns.push(PathPattern {
        segments: prefix.clone(),
    });
    walk(child, prefix, ancestors, patterns);
    prefix.pop();
}
