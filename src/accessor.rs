// src/accessor.rs
use crate::config::KeygetConfig;
use crate::error::KeygetError;
use crate::method::{BoundMethod, bind};
use keyget_path::{IntoPath, Path, Segment};
use keyget_types::Value;
use keyget_walk::{
    Append, Assign, StructureEntry, TerminalOp, Tree, Update, breadcrumbs, is_resolved,
    materialize, select, structure,
};

/// A configured entry point to every keyget operation.
///
/// The free functions at the crate root use `Keyget::default()`.
#[derive(Debug, Clone, Default)]
pub struct Keyget {
    config: KeygetConfig,
}

impl Keyget {
    pub fn new(config: KeygetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeygetConfig {
        &self.config
    }

    /// Normalizes `path` using the configured separator.
    pub fn path(&self, path: impl IntoPath) -> Path {
        path.into_path(self.config.separator)
    }

    /// Normalizes a dynamically typed path: a string (split on the configured
    /// separator) or an array of keys and non-negative integer indices.
    pub fn json_path(&self, path: &serde_json::Value) -> Result<Path, KeygetError> {
        match path {
            serde_json::Value::String(s) => Ok(Path::parse_with(s, self.config.separator)),
            other => Ok(Path::from_json_sequence(other)?),
        }
    }

    /// The value at `path`, or the last value reached when the path does not
    /// fully resolve. The empty path yields `target` itself.
    pub fn get<'t, T: Tree>(&self, target: &'t T, path: impl IntoPath) -> &'t T {
        let path = self.path(path);
        let crumbs = breadcrumbs(target, &path);
        crumbs.last().copied().unwrap_or(target)
    }

    /// The value at `path`, only if every segment resolved.
    pub fn lookup<'t, T: Tree>(&self, target: &'t T, path: impl IntoPath) -> Option<&'t T> {
        let path = self.path(path);
        let crumbs = breadcrumbs(target, &path);
        if is_resolved(&crumbs, &path) {
            crumbs.last().copied()
        } else {
            None
        }
    }

    pub fn has<T: Tree>(&self, target: &T, path: impl IntoPath) -> bool {
        let path = self.path(path);
        is_resolved(&breadcrumbs(target, &path), &path)
    }

    /// Resolves a strictly sequence-typed dynamic path and returns the values
    /// visited, without the root.
    pub fn select_json<'t, T: Tree>(
        &self,
        target: &'t T,
        path: &serde_json::Value,
    ) -> Result<Vec<&'t T>, KeygetError> {
        let path = Path::from_json_sequence(path)?;
        Ok(select(target, &path))
    }

    /// Stores `value` at `path`, creating intermediate containers.
    ///
    /// Fails when `path` names a reserved segment or an index more than
    /// `max_array_gap` slots past the end of an array. Returns the
    /// authoritative root: when `target` is not a container it is replaced,
    /// so always use the returned value.
    pub fn set<T: Tree>(&self, target: T, path: impl IntoPath, value: T) -> Result<T, KeygetError> {
        self.write(target, path, Assign(value))
    }

    /// Appends `value` to the array at `path`. Any other value at `path` (or no
    /// value at all) is replaced with `[value]`.
    pub fn push<T: Tree>(&self, target: T, path: impl IntoPath, value: T) -> Result<T, KeygetError> {
        self.write(target, path, Append(value))
    }

    /// Walks `path` like [`Keyget::set`] and hands the owning container and
    /// the last segment to `update`. For the empty path `update` receives the
    /// root and `None`.
    pub fn at<T, F>(&self, target: T, path: impl IntoPath, update: F) -> Result<T, KeygetError>
    where
        T: Tree,
        F: FnOnce(&mut T, Option<&Segment>),
    {
        self.write(target, path, Update(update))
    }

    fn write<T, O>(&self, mut target: T, path: impl IntoPath, op: O) -> Result<T, KeygetError>
    where
        T: Tree,
        O: TerminalOp<T>,
    {
        let path = self.path(path);
        materialize(
            &mut target,
            &path,
            &self.config.reserved,
            self.config.max_array_gap,
            op,
        )?;
        Ok(target)
    }

    /// The method at `path` bound to its owner, or [`BoundMethod::NOOP`].
    pub fn method<'t>(&self, target: &'t Value, path: impl IntoPath) -> BoundMethod<'t> {
        let path = self.path(path);
        let crumbs = breadcrumbs(target, &path);
        if !is_resolved(&crumbs, &path) {
            log::trace!(
                "no method at '{}': path stops after {} segment(s)",
                path.join(self.config.separator),
                crumbs.len() - 1
            );
            return BoundMethod::NOOP;
        }
        bind(target, &crumbs)
    }

    /// Calls the method at `path` with `args`. A missing method returns
    /// `Value::Null`.
    pub fn call(&self, target: &Value, path: impl IntoPath, args: &[Value]) -> Value {
        self.method(target, path).call(args)
    }

    pub fn structure<'t, T: Tree>(&self, target: &'t T) -> Vec<StructureEntry<'t, T>> {
        structure(target)
    }
}
