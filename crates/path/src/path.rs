//! The canonical path type and the conversions that normalize into it.
use crate::error::PathError;
use crate::parser::split_segments;
use crate::segment::Segment;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;

/// An ordered, immutable sequence of segments. The empty path refers to the
/// root of a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The separator used by dotted path strings unless configured otherwise.
    pub const DEFAULT_SEPARATOR: char = '.';

    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Splits a dotted string into key segments.
    pub fn parse(input: &str) -> Self {
        Self::parse_with(input, Self::DEFAULT_SEPARATOR)
    }

    pub fn parse_with(input: &str, separator: char) -> Self {
        Self(split_segments(input, separator))
    }

    /// Normalizes a dynamically typed path: a dotted string or an array of
    /// keys and non-negative integer indices.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, PathError> {
        Self::deserialize(value).map_err(|e| PathError::invalid(e.to_string()))
    }

    /// Like [`Path::from_json`] but only accepts the explicit sequence form.
    pub fn from_json_sequence(value: &serde_json::Value) -> Result<Self, PathError> {
        if !value.is_array() {
            return Err(PathError::invalid(format!(
                "expected a sequence of segments, got {}",
                json_kind(value)
            )));
        }
        Vec::<Segment>::deserialize(value)
            .map(Self)
            .map_err(|e| PathError::invalid(e.to_string()))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }

    /// The path written back out with `separator` between segments.
    pub fn join(&self, separator: char) -> String {
        let mut out = String::new();
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(&segment.to_key());
        }
        out
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl Deref for Path {
    type Target = [Segment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Segment]> for Path {
    fn as_ref(&self) -> &[Segment] {
        &self.0
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl From<&[Segment]> for Path {
    fn from(segments: &[Segment]) -> Self {
        Self(segments.to_vec())
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Always joins with [`Path::DEFAULT_SEPARATOR`]. Use [`Path::join`] to
/// render a path in a custom separator.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(Self::DEFAULT_SEPARATOR))
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged, expecting = "a dotted path string or a sequence of segments")]
        enum Repr {
            Dotted(String),
            Segments(Vec<Segment>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Dotted(s) => Path::parse(&s),
            Repr::Segments(segments) => Path(segments),
        })
    }
}

/// Anything that can be normalized into a [`Path`].
///
/// Strings are split on the separator; explicit segment sequences pass
/// through unchanged.
pub trait IntoPath {
    fn into_path(self, separator: char) -> Path;
}

impl IntoPath for &str {
    fn into_path(self, separator: char) -> Path {
        Path::parse_with(self, separator)
    }
}

impl IntoPath for &String {
    fn into_path(self, separator: char) -> Path {
        Path::parse_with(self, separator)
    }
}

impl IntoPath for String {
    fn into_path(self, separator: char) -> Path {
        Path::parse_with(&self, separator)
    }
}

impl IntoPath for Path {
    fn into_path(self, _separator: char) -> Path {
        self
    }
}

impl IntoPath for &Path {
    fn into_path(self, _separator: char) -> Path {
        self.clone()
    }
}

impl IntoPath for Vec<Segment> {
    fn into_path(self, _separator: char) -> Path {
        Path(self)
    }
}

impl IntoPath for &[Segment] {
    fn into_path(self, _separator: char) -> Path {
        Path(self.to_vec())
    }
}

impl<const N: usize> IntoPath for [Segment; N] {
    fn into_path(self, _separator: char) -> Path {
        Path(self.into())
    }
}
