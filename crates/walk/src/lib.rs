//! The path walkers behind keyget.
//!
//! - [`breadcrumbs`] / [`select`]: read-only resolution that records every
//!   value visited and stops at the first missing segment.
//! - [`materialize`]: the create-on-demand walk used by every write. Missing
//!   or scalar slots become fresh containers whose kind follows the next
//!   segment ([`ContainerKind::for_segment`]). Indices far past the end of
//!   an array are rejected by [`check_array_gaps`].
//! - [`structure`]: flattens a tree into `(path, leaf)` entries.
//!
//! All walkers are generic over [`Tree`], implemented here for
//! [`keyget_types::Value`] and [`serde_json::Value`].

pub mod bounds;
pub mod error;
pub mod flatten;
pub mod kind;
pub mod materialize;
pub mod reserved;
pub mod resolve;
pub mod tree;

// --- Public API ---
pub use bounds::{DEFAULT_MAX_ARRAY_GAP, check_array_gaps};
pub use error::WalkError;
pub use flatten::{StructureEntry, structure, structure_with_prefix};
pub use kind::ContainerKind;
pub use materialize::{Append, Assign, TerminalOp, Update, materialize};
pub use reserved::{DEFAULT_RESERVED, ReservedSegments};
pub use resolve::{breadcrumbs, is_resolved, select};
pub use tree::{Children, Tree};
