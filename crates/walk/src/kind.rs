//! The array-versus-map decision shared by every walker.
use keyget_path::Segment;

/// The two shapes a container can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// An ordered sequence addressed by index.
    Array,
    /// A keyed map addressed by string key.
    Map,
}

impl ContainerKind {
    /// The kind of container to allocate so that `segment` can be stored in it.
    ///
    /// Only the segment variant matters: a [`Segment::Index`] asks for an
    /// array, a [`Segment::Key`] for a map, even when the key reads as a number.
    pub fn for_segment(segment: &Segment) -> Self {
        match segment {
            Segment::Index(_) => ContainerKind::Array,
            Segment::Key(_) => ContainerKind::Map,
        }
    }
}
