//! Limits on how far a write may pad an array.
use crate::error::WalkError;
use crate::kind::ContainerKind;
use crate::tree::Tree;
use keyget_path::Segment;

/// The default number of nulls a single write may insert to reach an index.
pub const DEFAULT_MAX_ARRAY_GAP: usize = 10_000;

/// Replays the container choices of a write along `path` without mutating
/// `root`, and rejects any index that would pad an array with more than
/// `max_gap` nulls.
///
/// Existing arrays are measured. Containers the write would allocate start
/// empty. Arrays a named key would promote to a map never pad.
pub fn check_array_gaps<T: Tree>(
    root: &T,
    path: &[Segment],
    max_gap: usize,
) -> Result<(), WalkError> {
    let mut node = Some(root).filter(|n| n.is_container());
    for (position, segment) in path.iter().enumerate() {
        let len = match node {
            Some(existing) => existing.array_len(),
            None if ContainerKind::for_segment(segment) == ContainerKind::Array => Some(0),
            None => None,
        };
        if let (Some(len), Some(index)) = (len, segment.as_index())
            && index.saturating_sub(len) > max_gap
        {
            log::debug!(
                "rejecting index {} at position {}: array of length {} allows a gap of {}",
                index,
                position,
                len,
                max_gap
            );
            return Err(WalkError::IndexOutOfRange {
                index,
                position,
                len,
                max_gap,
            });
        }
        node = node
            .and_then(|n| n.child(segment))
            .filter(|c| c.is_container());
    }
    Ok(())
}
