//! Mapping profiles and the demonstration profile.
//!
//! A profile is a named, reusable unit of configuration. Applications apply
//! profiles to a [`MappingConfiguration`] before building the registry.

use tuplemap_model::{ModelA, ModelB, ModelC};

use crate::registry::{MappingConfiguration, TypeMap};
use crate::value::Destination;

/// A named unit of mapping configuration.
pub trait MappingProfile {
    /// Returns a short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Registers this profile's descriptors.
    fn configure(&self, config: &mut MappingConfiguration);
}

impl Destination for ModelA {
    const MEMBERS: &'static [&'static str] = ModelA::FIELD_NAMES;
}

impl Destination for ModelB {
    const MEMBERS: &'static [&'static str] = ModelB::FIELD_NAMES;
}

impl Destination for ModelC {
    const MEMBERS: &'static [&'static str] = ModelC::FIELD_NAMES;
}

/// Profile deriving [`ModelB`] and [`ModelC`] from [`ModelA`].
///
/// | Pair | Rules |
/// |------|-------|
/// | A -> B | `field3 = field1 + "_b"`, `field4 = field2 + "_b"` |
/// | A -> C | `field5 = field1 + "_c"`, `field6 = field2 + "_c"` |
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProfile;

impl MappingProfile for DemoProfile {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn configure(&self, config: &mut MappingConfiguration) {
        config
            .register(
                TypeMap::<ModelA, ModelB>::new()
                    .for_member(
                        "field3",
                        |a: &ModelA| format!("{}_b", a.field1),
                        |b, value| b.field3 = value,
                    )
                    .for_member(
                        "field4",
                        |a: &ModelA| format!("{}_b", a.field2),
                        |b, value| b.field4 = value,
                    ),
            )
            .register(
                TypeMap::<ModelA, ModelC>::new()
                    .for_member(
                        "field5",
                        |a: &ModelA| format!("{}_c", a.field1),
                        |c, value| c.field5 = value,
                    )
                    .for_member(
                        "field6",
                        |a: &ModelA| format!("{}_c", a.field2),
                        |c, value| c.field6 = value,
                    ),
            );
    }
}
