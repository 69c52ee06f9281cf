//! Create-on-demand path walking for writes.
use crate::bounds::check_array_gaps;
use crate::error::WalkError;
use crate::kind::ContainerKind;
use crate::reserved::ReservedSegments;
use crate::tree::Tree;
use keyget_path::Segment;

/// The action applied once the walk reaches the end of the path.
///
/// `container` is the container owning the last segment and `last` that
/// segment. For the empty path `last` is `None` and `container` is the root
/// slot itself, which may hold any value.
pub trait TerminalOp<T> {
    fn apply(self, container: &mut T, last: Option<&Segment>);
}

/// Stores a value, overwriting whatever was there.
#[derive(Debug, Clone)]
pub struct Assign<T>(pub T);

/// Appends to an existing array, or replaces the slot with `[value]`.
#[derive(Debug, Clone)]
pub struct Append<T>(pub T);

/// Runs a caller-supplied update against the owning container.
pub struct Update<F>(pub F);

impl<T: Tree> TerminalOp<T> for Assign<T> {
    fn apply(self, container: &mut T, last: Option<&Segment>) {
        match last {
            Some(segment) => *container.slot_mut(segment) = self.0,
            None => *container = self.0,
        }
    }
}

impl<T: Tree> TerminalOp<T> for Append<T> {
    fn apply(self, container: &mut T, last: Option<&Segment>) {
        let slot = match last {
            Some(segment) => container.slot_mut(segment),
            None => container,
        };
        match slot.items_mut() {
            Some(items) => items.push(self.0),
            None => *slot = T::from_items(vec![self.0]),
        }
    }
}

impl<T, F> TerminalOp<T> for Update<F>
where
    F: FnOnce(&mut T, Option<&Segment>),
{
    fn apply(self, container: &mut T, last: Option<&Segment>) {
        (self.0)(container, last)
    }
}

/// Walks `path` from `root`, creating whatever is missing, then applies `op`.
///
/// A scalar root is replaced with a fresh container whose kind follows the
/// first segment. Every intermediate slot that is absent or holds a scalar is
/// replaced with a fresh container whose kind follows the *next* segment.
///
/// The whole path is checked against `reserved` and `max_array_gap` before
/// anything is touched, so a rejected write leaves `root` unchanged.
pub fn materialize<T, O>(
    root: &mut T,
    path: &[Segment],
    reserved: &ReservedSegments,
    max_array_gap: usize,
    op: O,
) -> Result<(), WalkError>
where
    T: Tree,
    O: TerminalOp<T>,
{
    reserved.check(path)?;
    check_array_gaps(root, path, max_array_gap)?;

    let Some((last, init)) = path.split_last() else {
        op.apply(root, None);
        return Ok(());
    };

    if !root.is_container() {
        let kind = ContainerKind::for_segment(&path[0]);
        log::trace!("allocating {:?} root for segment '{}'", kind, path[0]);
        *root = T::empty(kind);
    }

    let mut node = root;
    for (depth, segment) in init.iter().enumerate() {
        let slot = node.slot_mut(segment);
        if !slot.is_container() {
            let next = &path[depth + 1];
            let kind = ContainerKind::for_segment(next);
            log::trace!("allocating {:?} at '{}' for segment '{}'", kind, segment, next);
            *slot = T::empty(kind);
        }
        node = slot;
    }

    op.apply(node, Some(last));
    Ok(())
}
