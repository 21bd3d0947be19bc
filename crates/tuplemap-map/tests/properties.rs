//! Property tests: adapters agree with independent per-element mapping.

use proptest::prelude::*;

use tuplemap_map::{
    DemoProfile, MappingConfiguration, MappingRegistry, TypeKey, item_key, map_dynamic, map_tuple,
};
use tuplemap_model::{ModelA, ModelB, ModelC};

fn demo_registry() -> MappingRegistry {
    let mut config = MappingConfiguration::new();
    config.add_profile(DemoProfile);
    config.build().expect("build demo registry")
}

proptest! {
    #[test]
    fn ruled_fields_follow_rules(field1 in ".{0,16}", field2 in ".{0,16}") {
        let registry = demo_registry();
        let a = ModelA::new(field1.clone(), field2.clone());

        let b: ModelB = registry.map(&a).unwrap();
        prop_assert_eq!(b.field3, format!("{field1}_b"));
        prop_assert_eq!(b.field4, format!("{field2}_b"));

        let c: ModelC = registry.map(&a).unwrap();
        prop_assert_eq!(c.field5, format!("{field1}_c"));
        prop_assert_eq!(c.field6, format!("{field2}_c"));
    }

    #[test]
    fn tuple_equals_element_wise_map(field1 in "[a-z]{0,8}", field2 in "[a-z]{0,8}") {
        let registry = demo_registry();
        let a = ModelA::new(field1, field2);

        let (b, c): (ModelB, ModelC) = map_tuple(&registry, &a).unwrap();
        prop_assert_eq!(b, registry.map::<_, ModelB>(&a).unwrap());
        prop_assert_eq!(c, registry.map::<_, ModelC>(&a).unwrap());
    }

    #[test]
    fn dynamic_equals_element_wise_map(
        field1 in "[a-z]{0,8}",
        picks in proptest::collection::vec(any::<bool>(), 0..20),
    ) {
        let registry = demo_registry();
        let a = ModelA::new(field1, "x");
        let destinations: Vec<TypeKey> = picks
            .iter()
            .map(|pick| if *pick { TypeKey::of::<ModelB>() } else { TypeKey::of::<ModelC>() })
            .collect();

        let bag = map_dynamic(&registry, &a, &destinations).unwrap();
        prop_assert_eq!(bag.len(), picks.len());

        for (index, (key, value)) in bag.iter().enumerate() {
            prop_assert_eq!(key, item_key(index));
            if picks[index] {
                let expected: ModelB = registry.map(&a).unwrap();
                prop_assert_eq!(value.downcast_ref::<ModelB>(), Some(&expected));
            } else {
                let expected: ModelC = registry.map(&a).unwrap();
                prop_assert_eq!(value.downcast_ref::<ModelC>(), Some(&expected));
            }
        }
    }
}
