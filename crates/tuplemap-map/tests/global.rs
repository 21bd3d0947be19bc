//! The global registry lifecycle.
//!
//! Kept to a single test so no other test in this binary can publish the
//! registry first.

use tuplemap_map::{DemoProfile, MappingError, global, initialize, map_tuple};
use tuplemap_model::{ModelA, ModelB, ModelC};

#[test]
fn global_registry_is_published_once() {
    assert_eq!(global().unwrap_err(), MappingError::NotInitialized);

    let registry = initialize(|config| {
        config.add_profile(DemoProfile);
    })
    .expect("first initialize");
    assert_eq!(registry.len(), 2);

    let again = initialize(|config| {
        config.add_profile(DemoProfile);
    });
    assert_eq!(again.unwrap_err(), MappingError::AlreadyInitialized);

    let (b, c): (ModelB, ModelC) =
        map_tuple(global().expect("published"), &ModelA::new("a", "b")).unwrap();
    assert_eq!(b, ModelB::new("a_b", "b_b"));
    assert_eq!(c, ModelC::new("a_c", "b_c"));
}
