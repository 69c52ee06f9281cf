//! The tree-shaped value model that keyget walks.
//!
//! A [`Value`] is either a scalar (null, boolean, number, string), a container
//! (array or insertion-ordered map), or a [`Method`] bound at call time to the
//! object that owns it.

pub mod method;
pub mod value;

pub use method::Method;
pub use serde_json::Number;
pub use value::{Map, Value};
