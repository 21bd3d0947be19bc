//! Runtime type identifiers used to key the mapping registry.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime identifier for a Rust type.
///
/// Identity is the [`TypeId`]; the type name is kept for diagnostics only and
/// does not take part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name (e.g. `ModelB`).
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A `(source, destination)` pair identifying one registered descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    pub source: TypeKey,
    pub destination: TypeKey,
}

impl TypePair {
    pub fn new(source: TypeKey, destination: TypeKey) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn of<S: Any, D: Any>() -> Self {
        Self::new(TypeKey::of::<S>(), TypeKey::of::<D>())
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Builds a `Vec<TypeKey>` from a list of types.
///
/// ```ignore
/// let destinations = type_keys![ModelB, ModelB, ModelC];
/// ```
#[macro_export]
macro_rules! type_keys {
    ($($ty:ty),* $(,)?) => {
        vec![$($crate::TypeKey::of::<$ty>()),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Left;
    struct Right;

    #[test]
    fn keys_compare_by_type_identity() {
        assert_eq!(TypeKey::of::<Left>(), TypeKey::of::<Left>());
        assert_ne!(TypeKey::of::<Left>(), TypeKey::of::<Right>());
        assert_ne!(TypePair::of::<Left, Right>(), TypePair::of::<Right, Left>());
    }

    #[test]
    fn short_name_drops_module_path() {
        let key = TypeKey::of::<Left>();
        assert!(key.name().ends_with("::Left"));
        assert_eq!(key.short_name(), "Left");
        assert_eq!(TypeKey::of::<u32>().short_name(), "u32");
    }

    #[test]
    fn type_keys_macro_preserves_order() {
        let keys = type_keys![Left, Right, Left];
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0], TypeKey::of::<Left>());
        assert_eq!(keys[1], TypeKey::of::<Right>());
        assert_eq!(keys[2], TypeKey::of::<Left>());
    }
}
