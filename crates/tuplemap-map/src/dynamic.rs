//! Dynamic adapter: maps one source into an ordered, key-addressed bag.
//!
//! Unlike the tuple adapter there is no arity limit. Entries are keyed
//! `Item1`, `Item2`, ... by position and iterate in that order.

use std::any::Any;

use indexmap::IndexMap;
use tracing::trace;

use crate::error::Result;
use crate::registry::MappingRegistry;
use crate::types::TypeKey;
use crate::value::MappedValue;

/// Key for the element at `index` (0-based): `Item{index + 1}`.
pub fn item_key(index: usize) -> String {
    format!("Item{}", index + 1)
}

/// Insertion-ordered map from synthetic key to mapped value.
#[derive(Debug, Default)]
pub struct DynamicBag {
    items: IndexMap<String, Box<dyn MappedValue>>,
}

impl DynamicBag {
    pub fn get(&self, key: &str) -> Option<&dyn MappedValue> {
        self.items.get(key).map(|item| &**item)
    }

    /// Value at `key` if it is a `D`.
    pub fn get_as<D: Any>(&self, key: &str) -> Option<&D> {
        self.get(key)?.downcast_ref::<D>()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn MappedValue)> + '_ {
        self.items
            .iter()
            .map(|(key, item)| (key.as_str(), &**item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_values(self) -> Vec<Box<dyn MappedValue>> {
        self.items.into_values().collect()
    }
}

/// Maps `source` once per destination into a [`DynamicBag`].
///
/// Fails as a whole on the first unregistered destination.
pub fn map_dynamic<S: Any>(
    registry: &MappingRegistry,
    source: &S,
    destinations: &[TypeKey],
) -> Result<DynamicBag> {
    trace!(count = destinations.len(), "map_dynamic");
    let items = registry
        .map_many(source, destinations)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| (item_key(index), item))
        .collect();
    Ok(DynamicBag { items })
}
