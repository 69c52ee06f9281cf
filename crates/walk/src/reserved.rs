//! The deny-set of keys a write path may never touch.
use crate::error::WalkError;
use keyget_path::Segment;
use std::collections::BTreeSet;

/// Keys that name structural slots of the host object model.
pub const DEFAULT_RESERVED: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// An explicit set of keys rejected by every write.
///
/// Only [`Segment::Key`] segments are checked; indices can never be reserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedSegments {
    keys: BTreeSet<String>,
}

impl ReservedSegments {
    /// A set that rejects nothing.
    pub fn none() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }

    /// Adds `key` to the deny-set.
    pub fn insert(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Fails on the first reserved segment of `path`.
    pub fn check(&self, path: &[Segment]) -> Result<(), WalkError> {
        for (position, segment) in path.iter().enumerate() {
            if let Segment::Key(key) = segment
                && self.contains(key)
            {
                log::debug!("rejecting write through reserved segment '{}'", key);
                return Err(WalkError::UnsafePathSegment {
                    segment: key.clone(),
                    position,
                });
            }
        }
        Ok(())
    }
}

impl Default for ReservedSegments {
    fn default() -> Self {
        Self {
            keys: DEFAULT_RESERVED.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedSegments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let reserved = ReservedSegments::default();
        assert!(reserved.contains("__proto__"));
        assert!(reserved.contains("constructor"));
        assert!(reserved.contains("prototype"));
        assert!(!reserved.contains("proto"));
    }

    #[test]
    fn test_check_reports_position() {
        let reserved = ReservedSegments::default();
        let path = [Segment::key("a"), Segment::index(0), Segment::key("constructor")];
        assert_eq!(
            reserved.check(&path),
            Err(WalkError::UnsafePathSegment {
                segment: "constructor".to_string(),
                position: 2,
            })
        );
        assert!(reserved.check(&[Segment::key("a")]).is_ok());
    }

    #[test]
    fn test_empty_set_allows_everything() {
        assert!(ReservedSegments::none()
            .check(&[Segment::key("__proto__")])
            .is_ok());
    }

    #[test]
    fn test_custom_set() {
        let reserved: ReservedSegments = ["$meta"].into_iter().collect();
        assert!(reserved.check(&[Segment::key("$meta")]).is_err());
        assert!(reserved.check(&[Segment::key("constructor")]).is_ok());
    }
}
