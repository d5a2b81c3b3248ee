//! Path types for addressing values inside a nested structure.
//!
//! A path is an ordered list of [`Segment`]s. The textual form joins segments
//! with `.`; each segment is a map key or, when it is written as a canonical
//! decimal number, a list index.
//!
//! # Core Types
//!
//! - [`Segment`] - One validated step of a path
//! - [`PathBuf`] - An owned path that can be parsed, built and extended
//!
//! # Usage
//!
//! ```rust
//! use polyfold::structure::PathBuf;
//! use std::str::FromStr;
//!
//! // Parse from a dotted string
//! let path = PathBuf::from_str("user.profile.name")?;
//!
//! // Build incrementally
//! let built = PathBuf::new()
//!     .try_push("user")?
//!     .try_push("profile")?
//!     .try_push("name")?;
//!
//! assert_eq!(path, built);
//! # Ok::<(), polyfold::structure::PathError>(())
//! ```
//!
//! Unlike a lenient normalizer, parsing rejects empty segments: `"a..b"`,
//! `".a"` and `"a."` are all errors. The empty string is the path with no
//! segments, which resolves to the root itself.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::constants::PATH_SEPARATOR;

/// Error type for path validation failures.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The dotted string contains an empty segment.
    #[error("empty segment at position {position} in path '{path}'")]
    EmptySegment { path: String, position: usize },

    /// A single segment failed validation.
    #[error("invalid segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },
}

impl PathError {
    /// Check if this error is an empty segment in a dotted string
    pub fn is_empty_segment(&self) -> bool {
        matches!(self, PathError::EmptySegment { .. })
    }
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// A validated segment of a path.
///
/// Segments are non-empty and never contain the separator.
///
/// ```rust
/// # use polyfold::structure::Segment;
/// assert!(Segment::new("user").is_ok());
/// assert!(Segment::new("0").is_ok());
///
/// assert!(Segment::new("").is_err());
/// assert!(Segment::new("user.name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    inner: String,
}

impl Segment {
    /// Creates a new segment from a string.
    ///
    /// # Errors
    /// Returns an error if the segment is empty or contains a dot.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        if s.is_empty() {
            return Err(PathError::InvalidSegment {
                segment: s,
                reason: "segments cannot be empty".to_string(),
            });
        }

        if s.contains(PATH_SEPARATOR) {
            return Err(PathError::InvalidSegment {
                segment: s,
                reason: "segments cannot contain dots".to_string(),
            });
        }

        Ok(Segment { inner: s })
    }

    /// Returns the segment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Interprets the segment as a list index.
    ///
    /// Only canonical decimal numbers qualify: `"0"` and `"12"` do, while
    /// `"01"`, `"+1"` and `"-1"` do not.
    pub fn as_index(&self) -> Option<usize> {
        let s = self.inner.as_str();
        let canonical = s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'));
        if canonical { s.parse().ok() } else { None }
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Segment {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::new(s)
    }
}

impl TryFrom<String> for Segment {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Segment::new(s)
    }
}

impl TryFrom<&str> for Segment {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Segment::new(s)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment {
            inner: index.to_string(),
        }
    }
}

/// An owned, validated path.
///
/// ```rust
/// # use polyfold::structure::PathBuf;
/// # use std::str::FromStr;
/// let path = PathBuf::from_str("items.0.title")?;
///
/// let components: Vec<&str> = path.components().collect();
/// assert_eq!(components, vec!["items", "0", "title"]);
/// assert_eq!(path.segments()[1].as_index(), Some(0));
/// # Ok::<(), polyfold::structure::PathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathBuf {
    segments: Vec<Segment>,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates a path from already validated segments.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Appends a validated segment.
    pub fn push(mut self, segment: impl Into<Segment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a segment, validating it first.
    pub fn try_push(mut self, segment: impl Into<String>) -> Result<Self, PathError> {
        self.segments.push(Segment::new(segment)?);
        Ok(self)
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: &PathBuf) -> Self {
        self.segments.extend(other.segments.iter().cloned());
        self
    }

    /// Returns the segments of this path.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns an iterator over the path components as string slices.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(Segment::as_str)
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the parent path, or `None` if this path is empty.
    pub fn parent(&self) -> Option<PathBuf> {
        let (_, init) = self.segments.split_last()?;
        Some(PathBuf::from_segments(init.iter().cloned()))
    }

    /// Returns the last segment, or `None` if empty.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

impl From<Segment> for PathBuf {
    fn from(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
        }
    }
}

impl AsRef<[Segment]> for PathBuf {
    fn as_ref(&self) -> &[Segment] {
        &self.segments
    }
}

impl FromStr for PathBuf {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::new());
        }

        s.split(PATH_SEPARATOR)
            .enumerate()
            .map(|(position, part)| {
                if part.is_empty() {
                    Err(PathError::EmptySegment {
                        path: s.to_string(),
                        position,
                    })
                } else {
                    Ok(Segment {
                        inner: part.to_string(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|segments| Self { segments })
    }
}

impl TryFrom<&str> for PathBuf {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(empty path)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
