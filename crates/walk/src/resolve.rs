//! Read-only path resolution.
use crate::tree::Tree;
use keyget_path::Segment;

/// Walks `path` from `target` and returns every value visited, starting with
/// `target` itself.
///
/// Walking stops at the first segment that is not an own child of the current
/// value. A result shorter than `path.len() + 1` means the path could not be
/// fully resolved; absence is never an error.
pub fn breadcrumbs<'t, T: Tree>(target: &'t T, path: &[Segment]) -> Vec<&'t T> {
    let mut crumbs = Vec::with_capacity(path.len() + 1);
    crumbs.push(target);

    if !target.is_container() {
        return crumbs;
    }

    let mut current = target;
    for segment in path {
        match current.child(segment) {
            Some(next) => {
                crumbs.push(next);
                current = next;
            }
            None => break,
        }
    }
    crumbs
}

/// Breadcrumbs without the root. Empty when `target` is not a container.
pub fn select<'t, T: Tree>(target: &'t T, path: &[Segment]) -> Vec<&'t T> {
    let mut crumbs = breadcrumbs(target, path);
    crumbs.remove(0);
    crumbs
}

/// True when `crumbs` reached the end of `path`.
pub fn is_resolved<T>(crumbs: &[&T], path: &[Segment]) -> bool {
    crumbs.len() == path.len() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn keys(path: &str) -> Vec<Segment> {
        path.split('.').map(Segment::from).collect()
    }

    #[test]
    fn test_full_resolution() {
        let tree = json!({ "a": { "b": 1 } });
        let crumbs = breadcrumbs(&tree, &keys("a.b"));
        assert_eq!(crumbs, vec![&tree, &json!({ "b": 1 }), &json!(1)]);
        assert!(is_resolved(&crumbs, &keys("a.b")));
    }

    #[test]
    fn test_partial_resolution() {
        let tree = json!({ "a": { "b": 2 } });
        let path = keys("a.b.c");
        let crumbs = breadcrumbs(&tree, &path);
        assert_eq!(crumbs.len(), 3);
        assert!(!is_resolved(&crumbs, &path));
        assert_eq!(select(&tree, &path), vec![&json!({ "b": 2 }), &json!(2)]);
    }

    #[test]
    fn test_mismatch_at_first_segment() {
        let tree = json!({ "b": 1 });
        assert!(select(&tree, &keys("a.b.c")).is_empty());
    }

    #[test]
    fn test_scalar_target() {
        for target in [Value::Null, json!(1), json!("text"), json!(true)] {
            assert_eq!(breadcrumbs(&target, &keys("a.b")), vec![&target]);
            assert!(select(&target, &keys("a.b")).is_empty());
        }
    }

    #[test]
    fn test_empty_path() {
        let tree = json!({ "a": 1 });
        assert_eq!(breadcrumbs(&tree, &[]), vec![&tree]);
        assert!(is_resolved(&breadcrumbs(&tree, &[]), &[]));
    }

    #[test]
    fn test_numeric_key_reaches_array_slot() {
        let tree = json!({ "list": ["x", "y"] });
        let crumbs = breadcrumbs(&tree, &keys("list.1"));
        assert_eq!(crumbs.last(), Some(&&json!("y")));
    }
}
