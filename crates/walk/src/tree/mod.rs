//! The seam between the walkers and a concrete data model.
//!
//! Every walker in this crate is written against [`Tree`]. Implementations are
//! provided for [`keyget_types::Value`] and [`serde_json::Value`].

use crate::kind::ContainerKind;
use keyget_path::Segment;

/// Ordered own entries of a container.
pub type Children<'a, T> = Box<dyn Iterator<Item = (Segment, &'a T)> + 'a>;

/// A tree-shaped value made of scalars, arrays and keyed maps.
pub trait Tree: Sized {
    /// The absent/null scalar used to pad arrays and fill fresh slots.
    fn null() -> Self;

    /// A fresh, empty container of the given kind.
    fn empty(kind: ContainerKind) -> Self;

    /// An array holding `items`.
    fn from_items(items: Vec<Self>) -> Self;

    /// `Some` iff the value is a container.
    fn container_kind(&self) -> Option<ContainerKind>;

    fn is_container(&self) -> bool {
        self.container_kind().is_some()
    }

    /// The own child addressed by `segment`. Never looks past the container
    /// itself, and is `None` for scalars.
    fn child(&self, segment: &Segment) -> Option<&Self>;

    /// The slot addressed by `segment`, created (as null) when absent.
    ///
    /// A scalar is first replaced with an empty container chosen by
    /// [`ContainerKind::for_segment`]. An array asked for a non-index key is
    /// promoted to a map. Writing past the end of an array pads it with nulls.
    fn slot_mut(&mut self, segment: &Segment) -> &mut Self;

    /// The length of an array, `None` for any other value.
    fn array_len(&self) -> Option<usize>;

    /// The items of an array.
    fn items_mut(&mut self) -> Option<&mut Vec<Self>>;

    /// Converts an array into a map keyed by decimal indices. No-op for any
    /// other value.
    fn promote_to_map(&mut self);

    /// Own entries in index order (arrays) or insertion order (maps). Empty
    /// for scalars.
    fn children(&self) -> Children<'_, Self>;
}

/// Makes `node` a container able to hold `segment`.
pub(crate) fn prepare_slot<T: Tree>(node: &mut T, segment: &Segment) {
    match node.container_kind() {
        None => *node = T::empty(ContainerKind::for_segment(segment)),
        Some(ContainerKind::Array) if segment.as_index().is_none() => {
            log::debug!("promoting array to map to hold key '{}'", segment);
            node.promote_to_map();
        }
        Some(_) => {}
    }
}

/// The slot at `index`, padding the array with nulls when it is too short.
///
/// Callers bound the gap first; see [`crate::bounds::check_array_gaps`].
pub(crate) fn array_slot<T: Tree>(items: &mut Vec<T>, index: usize) -> &mut T {
    if index >= items.len() {
        items.resize_with(index, T::null);
        items.push(T::null());
    }
    &mut items[index]
}

/// Implements [`Tree`] for an enum shaped like `serde_json::Value`: variants
/// `Null`, `Array(Vec<Self>)` and `Object($map)` where `$map` maps `String`
/// keys to `Self` in insertion order.
macro_rules! impl_tree {
    ($value:ty, $map:ty) => {
        impl $crate::tree::Tree for $value {
            fn null() -> Self {
                Self::Null
            }

            fn empty(kind: $crate::kind::ContainerKind) -> Self {
                match kind {
                    $crate::kind::ContainerKind::Array => Self::Array(Vec::new()),
                    $crate::kind::ContainerKind::Map => Self::Object(<$map>::new()),
                }
            }

            fn from_items(items: Vec<Self>) -> Self {
                Self::Array(items)
            }

            fn container_kind(&self) -> Option<$crate::kind::ContainerKind> {
                match self {
                    Self::Array(_) => Some($crate::kind::ContainerKind::Array),
                    Self::Object(_) => Some($crate::kind::ContainerKind::Map),
                    _ => None,
                }
            }

            fn child(&self, segment: &keyget_path::Segment) -> Option<&Self> {
                match self {
                    Self::Array(items) => segment.as_index().and_then(|i| items.get(i)),
                    Self::Object(map) => map.get(&*segment.to_key()),
                    _ => None,
                }
            }

            fn slot_mut(&mut self, segment: &keyget_path::Segment) -> &mut Self {
                $crate::tree::prepare_slot(self, segment);
                match self {
                    Self::Array(items) => {
                        let index = segment.as_index().unwrap_or(items.len());
                        $crate::tree::array_slot(items, index)
                    }
                    Self::Object(map) => map
                        .entry(segment.to_key().into_owned())
                        .or_insert(Self::Null),
                    other => other,
                }
            }

            fn array_len(&self) -> Option<usize> {
                match self {
                    Self::Array(items) => Some(items.len()),
                    _ => None,
                }
            }

            fn items_mut(&mut self) -> Option<&mut Vec<Self>> {
                match self {
                    Self::Array(items) => Some(items),
                    _ => None,
                }
            }

            fn promote_to_map(&mut self) {
                if let Self::Array(items) = self {
                    let map: $map = std::mem::take(items)
                        .into_iter()
                        .enumerate()
                        .map(|(i, v)| (i.to_string(), v))
                        .collect();
                    *self = Self::Object(map);
                }
            }

            fn children(&self) -> $crate::tree::Children<'_, Self> {
                match self {
                    Self::Array(items) => Box::new(
                        items
                            .iter()
                            .enumerate()
                            .map(|(i, v)| (keyget_path::Segment::Index(i), v)),
                    ),
                    Self::Object(map) => Box::new(
                        map.iter()
                            .map(|(k, v)| (keyget_path::Segment::Key(k.clone()), v)),
                    ),
                    _ => Box::new(std::iter::empty()),
                }
            }
        }
    };
}

mod json;
mod value;
