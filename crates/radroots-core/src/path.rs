//! # Field Paths
//!
//! Locations inside a payload, rendered as JSON Pointers (RFC 6901) so that
//! a violation reported here reads the same way as one reported by any
//! JSON Schema tooling the caller already uses.

use std::fmt;

use serde::{Serialize, Serializer};

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member by name.
    Key(String),
    /// Array element by position.
    Index(usize),
}

/// Path from the payload root to a nested value.
///
/// The root path is empty and displays as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The path of the payload itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from segments ordered root first.
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Returns true for the payload root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments ordered root first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Name of the innermost object member, if the path ends at one.
    pub fn last_key(&self) -> Option<&str> {
        match self.segments.last() {
            Some(PathSegment::Key(k)) => Some(k),
            _ => None,
        }
    }

    /// Append an object member step.
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    /// Append an array element step.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Return a copy of this path extended by an object member.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.push_key(key);
        next
    }

    /// Return a copy of this path extended by an array element.
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.push_index(index);
        next
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                // RFC 6901: '~' -> "~0", '/' -> "~1".
                PathSegment::Key(k) => write!(f, "/{}", k.replace('~', "~0").replace('/', "~1"))?,
                PathSegment::Index(i) => write!(f, "/{i}")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
