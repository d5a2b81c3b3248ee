//! Constants used throughout the polyfold library.

/// Separator between segments of a dotted path.
pub const PATH_SEPARATOR: char = '.';
