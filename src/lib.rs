//! Safe, uniform access to values nested deep inside tree-shaped data.
//!
//! A path is a dotted string (`"a.b.c"`) or an explicit sequence of
//! [`Segment`]s mixing keys and indices. Reads never fail on a missing path;
//! writes create whatever containers the path needs, choosing an array when
//! the next segment is an index and a map otherwise.
//!
//! ```ignore
//! use keyget::{Segment, Value};
//!
//! let tree = keyget::set(Value::Null, [Segment::key("a"), Segment::index(0)], Value::from(1))?;
//! assert_eq!(keyget::get(&tree, "a.0"), &Value::from(1));
//! assert!(keyget::has(&tree, "a"));
//! ```
//!
//! Every operation is generic over [`Tree`], so it works on [`Value`] as well
//! as on [`serde_json::Value`]. Only [`Value`] can hold methods.

mod accessor;
mod builder;
pub mod config;
pub mod error;
pub mod method;

use std::sync::LazyLock;

pub use accessor::Keyget;
pub use builder::KeygetBuilder;
pub use config::KeygetConfig;
pub use error::KeygetError;
pub use method::BoundMethod;

pub use keyget_path::{IntoPath, Path, PathError, Segment};
pub use keyget_types::{Map, Method, Number, Value};
pub use keyget_walk::{
    Append, Assign, ContainerKind, DEFAULT_MAX_ARRAY_GAP, DEFAULT_RESERVED, ReservedSegments,
    StructureEntry, TerminalOp, Tree, Update, WalkError, breadcrumbs, check_array_gaps,
    is_resolved, materialize, select, structure, structure_with_prefix,
};

static DEFAULT: LazyLock<Keyget> = LazyLock::new(Keyget::default);

/// The value at `path`. When the path does not fully resolve this is the last
/// value reached; the empty path yields `target` itself. See [`lookup`] for a
/// strict variant.
pub fn get<'t, T: Tree>(target: &'t T, path: impl IntoPath) -> &'t T {
    DEFAULT.get(target, path)
}

/// The value at `path`, only if every segment resolved.
pub fn lookup<'t, T: Tree>(target: &'t T, path: impl IntoPath) -> Option<&'t T> {
    DEFAULT.lookup(target, path)
}

/// True iff every segment of `path` is present.
pub fn has<T: Tree>(target: &T, path: impl IntoPath) -> bool {
    DEFAULT.has(target, path)
}

/// Stores `value` at `path` and returns the authoritative root.
pub fn set<T: Tree>(target: T, path: impl IntoPath, value: T) -> Result<T, KeygetError> {
    DEFAULT.set(target, path, value)
}

/// Appends `value` to the array at `path`, or replaces the slot with `[value]`.
pub fn push<T: Tree>(target: T, path: impl IntoPath, value: T) -> Result<T, KeygetError> {
    DEFAULT.push(target, path, value)
}

/// Walks `path` creating containers and runs `update` on the owning container.
pub fn at<T, F>(target: T, path: impl IntoPath, update: F) -> Result<T, KeygetError>
where
    T: Tree,
    F: FnOnce(&mut T, Option<&Segment>),
{
    DEFAULT.at(target, path, update)
}

/// The method at `path` bound to its owner. Never fails: a missing method is
/// [`BoundMethod::NOOP`].
pub fn method<'t>(target: &'t Value, path: impl IntoPath) -> BoundMethod<'t> {
    DEFAULT.method(target, path)
}

/// Invokes the method at `path` with `args`.
pub fn call(target: &Value, path: impl IntoPath, args: &[Value]) -> Value {
    DEFAULT.call(target, path, args)
}
