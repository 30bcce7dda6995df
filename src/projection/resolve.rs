//! Shape found at a path.

use super::shape::{Shape, ShapeKind};
use crate::path::{Path, Segment};
use log::trace;

impl Shape {
    /// Shape reached by one segment, `None` when the shape has no such member
    pub fn child(&self, segment: &Segment) -> Option<Shape> {
        let shape = self.unwrap_optional();
        match (&shape.kind, segment) {
            (ShapeKind::Array(item), Segment::Index(_)) => Some(item()),
            (ShapeKind::Tuple(items), _) => segment
                .as_index()
                .and_then(|index| items.get(index))
                .map(|item| item()),
            (ShapeKind::Map(item), _) => Some(item()),
            (ShapeKind::Object(fields), _) => fields
                .iter()
                .find(|field| Segment::parse(field.name) == *segment)
                .map(|field| (field.shape)()),
            _ => None,
        }
    }

    /// Shape of the value found by walking `path`
    ///
    /// `None` for the path returns this shape. A segment the current shape
    /// does not have yields `None` (never).
    pub fn resolve(&self, path: Option<&Path>) -> Option<Shape> {
        let Some(path) = path else {
            return Some(self.clone());
        };

        let mut current = self.clone();
        for segment in path.segments() {
            current = current.child(segment)?;
            trace!("  {} -> {}", segment, current.id);
        }
        Some(current)
    }

    /// Whether `path` addresses something in this shape
    ///
    /// Unlike [`Shape::paths`] this is not cut short by the recursion guard:
    /// `children.0.children.0` is accepted for a recursive tree shape.
    pub fn accepts(&self, path: Option<&Path>) -> bool {
        self.resolve(path).is_some()
    }
}
