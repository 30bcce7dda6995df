//! Path segments: one object key or one array/tuple index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step of a path
///
/// Segments are canonical: the decimal rendering of an index always parses
/// back to an index, so a rendered path maps to exactly one segment list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    Index(usize),
    Key(String),
}

impl Segment {
    /// Parse one raw segment
    ///
    /// `"0"` and digit strings without a leading zero become indices,
    /// everything else (including `"01"` and `"-1"`) is a key.
    pub fn parse(raw: &str) -> Self {
        if is_canonical_index(raw) {
            if let Ok(index) = raw.parse::<usize>() {
                return Segment::Index(index);
            }
        }
        Segment::Key(raw.to_string())
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Key(_) => None,
        }
    }
}

fn is_canonical_index(raw: &str) -> bool {
    !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'))
}

impl From<&str> for Segment {
    fn from(raw: &str) -> Self {
        Segment::parse(raw)
    }
}

impl From<String> for Segment {
    fn from(raw: String) -> Self {
        Segment::parse(&raw)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(index) => write!(f, "{}", index),
            Segment::Key(key) => f.write_str(key),
        }
    }
}
