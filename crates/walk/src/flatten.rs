//! Flattening a tree into `(path, leaf)` pairs.
use crate::tree::Tree;
use keyget_path::{Path, Segment};
use serde::Serialize;

/// A leaf of a tree together with the path that reaches it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureEntry<'a, T> {
    pub path: Path,
    pub value: &'a T,
}

/// Every leaf of `target`, depth-first, in index/insertion order.
///
/// Containers never produce entries of their own, so empty containers vanish.
/// A scalar `target` yields a single entry with the empty path.
///
/// There is no cycle detection; trees are assumed to be acyclic.
pub fn structure<T: Tree>(target: &T) -> Vec<StructureEntry<'_, T>> {
    structure_with_prefix(target, &[])
}

/// Like [`structure`], with every emitted path starting with `prefix`.
pub fn structure_with_prefix<'a, T: Tree>(
    target: &'a T,
    prefix: &[Segment],
) -> Vec<StructureEntry<'a, T>> {
    let mut entries = Vec::new();
    let mut path = prefix.to_vec();
    collect(target, &mut path, &mut entries);
    entries
}

fn collect<'a, T: Tree>(
    node: &'a T,
    path: &mut Vec<Segment>,
    entries: &mut Vec<StructureEntry<'a, T>>,
) {
    if !node.is_container() {
        entries.push(StructureEntry {
            path: Path::from(path.as_slice()),
            value: node,
        });
        return;
    }
    for (segment, child) in node.children() {
        path.push(segment);
        collect(child, path, entries);
        path.pop();
    }
}
