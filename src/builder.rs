// src/builder.rs
use crate::accessor::Keyget;
use crate::config::KeygetConfig;
use keyget_walk::ReservedSegments;

/// A builder for creating a configured [`Keyget`].
#[derive(Debug, Clone, Default)]
pub struct KeygetBuilder {
    config: KeygetConfig,
}

impl KeygetBuilder {
    /// Creates a new `KeygetBuilder` with the default separator and deny-set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the character string paths are split on.
    pub fn separator(mut self, separator: char) -> Self {
        self.config.separator = separator;
        self
    }

    /// Adds a key to the set of keys writes refuse to touch.
    pub fn reserve(mut self, key: impl Into<String>) -> Self {
        self.config.reserved.insert(key);
        self
    }

    /// Replaces the whole deny-set.
    pub fn reserved(mut self, reserved: ReservedSegments) -> Self {
        self.config.reserved = reserved;
        self
    }

    /// Sets how far past the end of an array a write may reach.
    pub fn max_array_gap(mut self, max_gap: usize) -> Self {
        self.config.max_array_gap = max_gap;
        self
    }

    pub fn build(self) -> Keyget {
        Keyget::new(self.config)
    }
}
