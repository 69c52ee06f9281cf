//! Path normalization for keyget.
//!
//! A path is given either as a dotted string (`"a.b.c"`) or as an explicit
//! sequence of [`Segment`]s. Both forms normalize into a [`Path`].
//!
//! Tokens of a dotted string are always keys. Whether a key can address an
//! array slot is decided at lookup time by [`Segment::as_index`].

pub mod error;
mod parser;
pub mod path;
pub mod segment;

// --- Public API ---
pub use error::PathError;
pub use parser::split_segments;
pub use path::{IntoPath, Path};
pub use segment::Segment;
