//! Defines a single step of a path.
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// One step of a path: a map key or an array index.
///
/// Serialized untagged, so `["a", 0]` reads as a key followed by an index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// An array index (e.g., `0`).
    Index(usize),
    /// An object key (e.g., `"name"`).
    Key(String),
}

impl Segment {
    pub fn key(key: impl Into<String>) -> Self {
        Segment::Key(key.into())
    }

    pub fn index(index: usize) -> Self {
        Segment::Index(index)
    }

    /// The array slot this segment addresses, if any.
    ///
    /// Keys address a slot only when they are written as a canonical decimal
    /// number: `"3"` does, `"03"`, `"+3"` and `"-3"` do not.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(i) => Some(*i),
            Segment::Key(k) => parse_canonical_index(k),
        }
    }

    /// The map key this segment addresses. Indices use their decimal form.
    pub fn to_key(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(k) => Cow::Borrowed(k),
            Segment::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }
}

fn parse_canonical_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => key.parse().ok(),
        _ => None,
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Key(s.to_string())
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Segment::Key(s)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Segment::Index(i)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => f.write_str(k),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}
