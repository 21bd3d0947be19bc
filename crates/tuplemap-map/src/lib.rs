//! Object-to-object mapping into tuple and dynamic destinations.
//!
//! The [`MappingRegistry`] holds declarative field-derivation rules per
//! `(source, destination)` type pair. Two adapters sit on top of it:
//!
//! - [`map_tuple`] / [`map_tuple_token`]: one source into a fixed-arity tuple
//!   (1 to [`MAX_TUPLE_ARITY`] elements);
//! - [`map_dynamic`]: one source into an ordered bag keyed `Item1..ItemN`.
//!
//! # Usage
//!
//! ```ignore
//! use tuplemap_map::{DemoProfile, global, initialize, map_tuple};
//!
//! initialize(|config| {
//!     config.add_profile(DemoProfile);
//! })?;
//! let (b1, c1): (ModelB, ModelC) = map_tuple(global()?, &ModelA::new("a", "b"))?;
//! ```

#![deny(unsafe_code)]

pub mod dynamic;
pub mod error;
pub mod global;
pub mod profile;
pub mod registry;
pub mod tuple;
pub mod types;
pub mod value;

pub use dynamic::{DynamicBag, item_key, map_dynamic};
pub use error::{MappingError, Result};
pub use global::{global, initialize};
pub use profile::{DemoProfile, MappingProfile};
pub use registry::{MappingConfiguration, MappingRegistry, TypeMap};
pub use tuple::{
    ErasedTuple, MAX_TUPLE_ARITY, TupleDestination, TypeToken, map_tuple, map_tuple_token,
};
pub use types::{TypeKey, TypePair};
pub use value::{Destination, MappedValue, downcast};
