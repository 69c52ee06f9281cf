use std::fmt;
use std::sync::Arc;

use crate::Value;

/// The signature every method value implements: the receiver (`this`) followed
/// by the call arguments.
pub type MethodFn = dyn Fn(&Value, &[Value]) -> Value + Send + Sync;

/// An invocable leaf stored inside a tree.
///
/// Methods are cheap to clone (the closure is shared) and compare by identity.
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    /// Invokes the method with `receiver` as its owner.
    pub fn invoke(&self, receiver: &Value, args: &[Value]) -> Value {
        (self.0)(receiver, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "method@{:p}", Arc::as_ptr(&self.0).cast::<()>())
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Method {}
