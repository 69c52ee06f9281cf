//! Methods resolved out of a tree, bound to the object that owns them.
use keyget_types::{Method, Value};

/// A callable returned by [`crate::method`]. Always safe to invoke: when the
/// path did not lead to a method it is [`BoundMethod::NOOP`].
#[derive(Debug, Clone, Copy)]
pub struct BoundMethod<'a> {
    bound: Option<(&'a Method, &'a Value)>,
}

impl BoundMethod<'static> {
    /// The shared no-op. Calling it returns `Value::Null`.
    pub const NOOP: Self = Self { bound: None };
}

impl<'a> BoundMethod<'a> {
    /// Binds `method` so that `receiver` is passed as its owner.
    pub fn new(method: &'a Method, receiver: &'a Value) -> Self {
        Self {
            bound: Some((method, receiver)),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.bound.is_none()
    }

    /// The owner the method will see, if any.
    pub fn receiver(&self) -> Option<&'a Value> {
        self.bound.map(|(_, receiver)| receiver)
    }

    pub fn call(&self, args: &[Value]) -> Value {
        match self.bound {
            Some((method, receiver)) => method.invoke(receiver, args),
            None => Value::Null,
        }
    }
}

impl Default for BoundMethod<'_> {
    fn default() -> Self {
        BoundMethod::NOOP
    }
}

/// Picks the method at the end of fully resolved `crumbs` and binds it to its
/// direct owner, or to `target` when the method is the root itself.
pub(crate) fn bind<'t>(target: &'t Value, crumbs: &[&'t Value]) -> BoundMethod<'t> {
    let Some(Value::Method(method)) = crumbs.last().copied() else {
        return BoundMethod::NOOP;
    };
    match crumbs.len() {
        n if n >= 2 => BoundMethod::new(method, crumbs[n - 2]),
        _ => BoundMethod::new(method, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_returns_null() {
        assert!(BoundMethod::NOOP.is_noop());
        assert_eq!(BoundMethod::NOOP.call(&[Value::from(1)]), Value::Null);
        assert!(BoundMethod::default().receiver().is_none());
    }

    #[test]
    fn test_bind_uses_direct_owner() {
        let method = Value::method(|this, _| this.clone());
        let owner: Value = [("run", method.clone())].into_iter().collect();
        let root: Value = [("owner", owner.clone())].into_iter().collect();

        let crumbs = vec![&root, &owner, &method];
        let bound = bind(&root, &crumbs);
        assert_eq!(bound.receiver(), Some(&owner));
        assert_eq!(bound.call(&[]), owner);
    }

    #[test]
    fn test_bind_root_method_to_target() {
        let method = Value::method(|_, args| Value::from(args.len()));
        let bound = bind(&method, &[&method]);
        assert_eq!(bound.receiver(), Some(&method));
        assert_eq!(bound.call(&[Value::Null, Value::Null]), Value::from(2));
    }

    #[test]
    fn test_bind_non_method_is_noop() {
        let value = Value::from("text");
        assert!(bind(&value, &[&value]).is_noop());
    }
}
