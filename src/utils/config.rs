//! Constants shared by the diff engine, the path model and the projection layer.

/// Separator between path segments in rendered paths
pub const PATH_SEPARATOR: char = '.';

/// `typeof` results whose values are never compared.
///
/// A leaf pair where either side has one of these types is always equal.
/// Additions and deletions of such values are still reported.
pub const IGNORED_TYPES: &[&str] = &["function", "symbol"];

/// Kinds that are atomic even though their `typeof` is `"object"`
pub const VALUE_OBJECT_KINDS: &[&str] = &["null", "date", "file"];

/// Label used when displaying a change at the root of the diffed values
pub const ROOT_PATH_LABEL: &str = "<root>";

/// Rendering of the "any array index" segment in path patterns
pub const ANY_INDEX_SEGMENT: &str = "*";

/// Rendering of the "any map key" segment in path patterns
pub const ANY_KEY_SEGMENT: &str = "{key}";
