//! Tuple adapter: maps one source into a fixed-arity tuple of destinations.
//!
//! Two entry points are provided:
//!
//! - [`map_tuple`] for call sites that name the tuple type statically. The
//!   element types are checked at compile time through [`TupleDestination`],
//!   which is implemented for native tuples of arity 1 through
//!   [`MAX_TUPLE_ARITY`].
//! - [`map_tuple_token`] for call sites that only hold a runtime
//!   [`TypeToken`]. The token is validated before any mapping work, and the
//!   resulting [`ErasedTuple`] can be turned into a native tuple with
//!   [`ErasedTuple::into_tuple`].
//!
//! Larger bundles go through [`crate::dynamic::map_dynamic`].

use std::any::{Any, type_name};
use std::borrow::Cow;

use tracing::trace;

use crate::error::{MappingError, Result};
use crate::registry::MappingRegistry;
use crate::types::TypeKey;
use crate::value::{Destination, MappedValue, downcast};

/// Largest tuple arity supported by the tuple adapter.
pub const MAX_TUPLE_ARITY: usize = 8;

/// A native tuple whose elements are all mapping destinations.
pub trait TupleDestination: Sized + 'static {
    const ARITY: usize;

    /// Element types in positional order.
    fn element_types() -> Vec<TypeKey>;

    /// Maps `source` once per element type and assembles the tuple.
    fn map_from<S: Any>(registry: &MappingRegistry, source: &S) -> Result<Self>;

    /// Assembles the tuple from already mapped values.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::ConstructionFailure`] when the number of values
    /// differs from the arity or a value has the wrong type for its position.
    fn from_values(values: Vec<Box<dyn MappedValue>>) -> Result<Self>;
}

fn take_element<T: Destination>(
    next: Option<(usize, Box<dyn MappedValue>)>,
    tuple_name: &'static str,
) -> Result<T> {
    let Some((position, value)) = next else {
        return Err(MappingError::ConstructionFailure {
            type_name: tuple_name.to_string(),
            reason: "missing element".to_string(),
        });
    };
    let found = (*value).type_key();
    downcast::<T>(value).ok_or_else(|| MappingError::ConstructionFailure {
        type_name: tuple_name.to_string(),
        reason: format!(
            "element {} expects {} but got {}",
            position + 1,
            type_name::<T>(),
            found.name()
        ),
    })
}

macro_rules! impl_tuple_destination {
    ($arity:literal => $($element:ident),+) => {
        impl<$($element: Destination),+> TupleDestination for ($($element,)+) {
            const ARITY: usize = $arity;

            fn element_types() -> Vec<TypeKey> {
                vec![$(TypeKey::of::<$element>()),+]
            }

            fn map_from<S: Any>(registry: &MappingRegistry, source: &S) -> Result<Self> {
                Ok(($(registry.map::<S, $element>(source)?,)+))
            }

            fn from_values(values: Vec<Box<dyn MappedValue>>) -> Result<Self> {
                let tuple_name = type_name::<Self>();
                if values.len() != $arity {
                    return Err(MappingError::ConstructionFailure {
                        type_name: tuple_name.to_string(),
                        reason: format!("expected {} values, got {}", $arity, values.len()),
                    });
                }
                let mut values = values.into_iter().enumerate();
                Ok(($(take_element::<$element>(values.next(), tuple_name)?,)+))
            }
        }
    };
}

impl_tuple_destination!(1 => T1);
impl_tuple_destination!(2 => T1, T2);
impl_tuple_destination!(3 => T1, T2, T3);
impl_tuple_destination!(4 => T1, T2, T3, T4);
impl_tuple_destination!(5 => T1, T2, T3, T4, T5);
impl_tuple_destination!(6 => T1, T2, T3, T4, T5, T6);
impl_tuple_destination!(7 => T1, T2, T3, T4, T5, T6, T7);
impl_tuple_destination!(8 => T1, T2, T3, T4, T5, T6, T7, T8);

/// Maps `source` into the tuple `T`, one registry lookup per element.
///
/// Fails as a whole if any element type has no mapping from `S`.
pub fn map_tuple<S: Any, T: TupleDestination>(registry: &MappingRegistry, source: &S) -> Result<T> {
    trace!(tuple = type_name::<T>(), arity = T::ARITY, "map_tuple");
    T::map_from(registry, source)
}

/// Runtime description of a requested destination type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeToken {
    name: Cow<'static, str>,
    elements: Option<Vec<TypeKey>>,
}

impl TypeToken {
    /// Token for a plain (non-tuple) type.
    pub fn of<T: Any>() -> Self {
        Self {
            name: Cow::Borrowed(type_name::<T>()),
            elements: None,
        }
    }

    /// Token for a native tuple type.
    pub fn tuple<T: TupleDestination>() -> Self {
        Self {
            name: Cow::Borrowed(type_name::<T>()),
            elements: Some(T::element_types()),
        }
    }

    /// Token for a tuple assembled from element types at runtime.
    pub fn tuple_of(elements: Vec<TypeKey>) -> Self {
        let names: Vec<&str> = elements.iter().map(TypeKey::name).collect();
        let name = if names.len() == 1 {
            format!("({},)", names[0])
        } else {
            format!("({})", names.join(", "))
        };
        Self {
            name: Cow::Owned(name),
            elements: Some(elements),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element types when the token describes a tuple.
    pub fn tuple_elements(&self) -> Option<&[TypeKey]> {
        self.elements.as_deref()
    }

    /// True for tuple tokens whose arity the tuple adapter supports.
    pub fn is_tuple(&self) -> bool {
        self.elements
            .as_ref()
            .is_some_and(|elements| (1..=MAX_TUPLE_ARITY).contains(&elements.len()))
    }
}

/// Mapped tuple elements whose tuple type is known only at runtime.
#[derive(Debug)]
pub struct ErasedTuple {
    type_name: String,
    items: Vec<Box<dyn MappedValue>>,
}

impl ErasedTuple {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index` (0-based).
    pub fn get(&self, index: usize) -> Option<&dyn MappedValue> {
        self.items.get(index).map(|item| &**item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn MappedValue> + '_ {
        self.items.iter().map(|item| &**item)
    }

    pub fn into_items(self) -> Vec<Box<dyn MappedValue>> {
        self.items
    }

    /// Constructs the native tuple `T` from the mapped elements.
    pub fn into_tuple<T: TupleDestination>(self) -> Result<T> {
        T::from_values(self.items)
    }
}

/// Maps `source` into the tuple described by `token`.
///
/// # Errors
///
/// - [`MappingError::InvalidDestinationShape`] if `token` is not a tuple of
///   supported arity; checked before any mapping.
/// - [`MappingError::UnregisteredMapping`] if any element type has no mapping
///   from `S`.
pub fn map_tuple_token<S: Any>(
    registry: &MappingRegistry,
    source: &S,
    token: &TypeToken,
) -> Result<ErasedTuple> {
    let Some(elements) = token.tuple_elements() else {
        return Err(MappingError::InvalidDestinationShape {
            type_name: token.name().to_string(),
            reason: "no positional elements".to_string(),
        });
    };
    if !token.is_tuple() {
        return Err(MappingError::InvalidDestinationShape {
            type_name: token.name().to_string(),
            reason: format!(
                "arity {} is outside 1..={MAX_TUPLE_ARITY}",
                elements.len()
            ),
        });
    }
    trace!(tuple = token.name(), arity = elements.len(), "map_tuple_token");
    let items = registry.map_many(source, elements)?;
    Ok(ErasedTuple {
        type_name: token.name().to_string(),
        items,
    })
}
