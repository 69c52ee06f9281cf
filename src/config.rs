use keyget_path::Path;
use keyget_walk::{DEFAULT_MAX_ARRAY_GAP, ReservedSegments};

/// Settings shared by every operation of a [`crate::Keyget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygetConfig {
    /// The character string paths are split on.
    ///
    /// Defaults to `.`.
    pub separator: char,
    /// Keys that no write may traverse or assign.
    ///
    /// Defaults to `__proto__`, `constructor` and `prototype`.
    pub reserved: ReservedSegments,
    /// How many nulls a single write may insert to reach an array index.
    pub max_array_gap: usize,
}

impl Default for KeygetConfig {
    fn default() -> Self {
        Self {
            separator: Path::DEFAULT_SEPARATOR,
            reserved: ReservedSegments::default(),
            max_array_gap: DEFAULT_MAX_ARRAY_GAP,
        }
    }
}
