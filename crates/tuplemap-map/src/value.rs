//! Destination trait and type-erased mapped values.

use std::any::Any;
use std::fmt;

use crate::types::TypeKey;

/// A type that can be produced by the mapping registry.
///
/// Destinations start from [`Default`]; every registered member rule then
/// assigns one member. Members without a rule keep their default value.
pub trait Destination: Default + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Names of the members a descriptor is expected to populate.
    ///
    /// Used only for configuration reports; an empty list disables them.
    const MEMBERS: &'static [&'static str] = &[];
}

/// A mapped destination instance whose concrete type is known only at runtime.
pub trait MappedValue: Any + fmt::Debug + fmt::Display + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn type_key(&self) -> TypeKey;
}

impl<T> MappedValue for T
where
    T: Any + fmt::Debug + fmt::Display + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_key(&self) -> TypeKey {
        TypeKey::of::<T>()
    }
}

impl dyn MappedValue {
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Moves the concrete value out of a boxed [`MappedValue`].
///
/// Returns `None` when the value is not a `T`.
pub fn downcast<T: Any>(value: Box<dyn MappedValue>) -> Option<T> {
    // Method calls on the box itself would resolve to the blanket impl for
    // `Box<dyn MappedValue>`, so go through the trait object explicitly.
    <dyn MappedValue as MappedValue>::into_any(value)
        .downcast::<T>()
        .ok()
        .map(|concrete| *concrete)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Label(&'static str);

    impl fmt::Display for Label {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    #[test]
    fn boxed_value_reports_inner_type() {
        let value: Box<dyn MappedValue> = Box::new(Label("x"));
        assert_eq!((*value).type_key(), TypeKey::of::<Label>());
        assert!((*value).is::<Label>());
        assert_eq!((*value).downcast_ref::<Label>(), Some(&Label("x")));
        assert_eq!(value.to_string(), "x");
    }

    #[test]
    fn downcast_moves_value_out_of_box() {
        let value: Box<dyn MappedValue> = Box::new(Label("y"));
        assert_eq!(downcast::<Label>(value), Some(Label("y")));

        let value: Box<dyn MappedValue> = Box::new(Label("z"));
        assert_eq!(downcast::<String>(value), None);
    }
}
