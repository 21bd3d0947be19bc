//! Mapping descriptors, configuration and the read-only registry.
//!
//! A [`TypeMap`] describes how one destination type is derived from one
//! source type: an ordered list of member rules, each a pure function of the
//! source that assigns one destination member. A [`MappingConfiguration`]
//! collects descriptors (directly or through [`MappingProfile`]s) and is
//! turned into an immutable [`MappingRegistry`] by [`MappingConfiguration::build`].
//!
//! # Example
//!
//! ```ignore
//! let mut config = MappingConfiguration::new();
//! config.register(
//!     TypeMap::<ModelA, ModelB>::new()
//!         .for_member("field3", |a| format!("{}_b", a.field1), |b, v| b.field3 = v)
//!         .for_member("field4", |a| format!("{}_b", a.field2), |b, v| b.field4 = v),
//! );
//! let registry = config.build()?;
//! let b: ModelB = registry.map(&ModelA::new("a", "b"))?;
//! ```

use std::any::Any;
use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::error::{MappingError, Result};
use crate::profile::MappingProfile;
use crate::types::{TypeKey, TypePair};
use crate::value::{Destination, MappedValue};

type AssignFn<S, D> = Box<dyn Fn(&S, &mut D) + Send + Sync>;

struct MemberRule<S, D> {
    member: &'static str,
    apply: AssignFn<S, D>,
}

/// Field-derivation rules for one `(S, D)` pair.
pub struct TypeMap<S, D> {
    rules: Vec<MemberRule<S, D>>,
}

impl<S: Any, D: Destination> TypeMap<S, D> {
    /// Creates a descriptor with no rules; it maps to `D::default()`.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule deriving `member` from the source.
    ///
    /// `map_from` computes the value and `assign` stores it on the
    /// destination. Rules run in the order they were added.
    pub fn for_member<V, F, A>(mut self, member: &'static str, map_from: F, assign: A) -> Self
    where
        F: Fn(&S) -> V + Send + Sync + 'static,
        A: Fn(&mut D, V) + Send + Sync + 'static,
    {
        self.rules.push(MemberRule {
            member,
            apply: Box::new(move |source: &S, destination: &mut D| {
                assign(destination, map_from(source));
            }),
        });
        self
    }

    /// Ruled member names in rule order.
    pub fn members(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.member)
    }

    /// Builds a new destination from `source`.
    pub fn map(&self, source: &S) -> D {
        let mut destination = D::default();
        for rule in &self.rules {
            (rule.apply)(source, &mut destination);
        }
        destination
    }

    fn duplicate_member(&self) -> Option<&'static str> {
        let mut seen = BTreeSet::new();
        self.members().find(|member| !seen.insert(*member))
    }

    /// First ruled member missing from `D::MEMBERS`; never set when `D`
    /// declares no members.
    fn unknown_member(&self) -> Option<&'static str> {
        if D::MEMBERS.is_empty() {
            return None;
        }
        self.members().find(|member| !D::MEMBERS.contains(member))
    }
}

impl<S: Any, D: Destination> Default for TypeMap<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Object-safe view of a [`TypeMap`] stored in the registry.
trait ErasedTypeMap: Send + Sync {
    fn pair(&self) -> TypePair;

    fn members(&self) -> Vec<&'static str>;

    fn declared_members(&self) -> &'static [&'static str];

    fn duplicate_member(&self) -> Option<&'static str>;

    fn unknown_member(&self) -> Option<&'static str>;

    fn map_erased(&self, source: &dyn Any) -> Option<Box<dyn MappedValue>>;

    fn as_any(&self) -> &dyn Any;
}

impl<S: Any, D: Destination> ErasedTypeMap for TypeMap<S, D> {
    fn pair(&self) -> TypePair {
        TypePair::of::<S, D>()
    }

    fn members(&self) -> Vec<&'static str> {
        TypeMap::members(self).collect()
    }

    fn declared_members(&self) -> &'static [&'static str] {
        D::MEMBERS
    }

    fn duplicate_member(&self) -> Option<&'static str> {
        TypeMap::duplicate_member(self)
    }

    fn unknown_member(&self) -> Option<&'static str> {
        TypeMap::unknown_member(self)
    }

    fn map_erased(&self, source: &dyn Any) -> Option<Box<dyn MappedValue>> {
        let source = source.downcast_ref::<S>()?;
        let mapped: Box<dyn MappedValue> = Box::new(self.map(source));
        Some(mapped)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Collects descriptors before the registry is built.
#[derive(Default)]
pub struct MappingConfiguration {
    maps: Vec<Box<dyn ErasedTypeMap>>,
    profiles: Vec<&'static str>,
}

impl MappingConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor.
    ///
    /// Registering the same pair twice is reported by [`Self::build`].
    pub fn register<S: Any, D: Destination>(&mut self, map: TypeMap<S, D>) -> &mut Self {
        debug!(
            source = TypeKey::of::<S>().short_name(),
            destination = TypeKey::of::<D>().short_name(),
            members = map.rules.len(),
            "registered mapping"
        );
        self.maps.push(Box::new(map));
        self
    }

    /// Applies every descriptor of a profile.
    pub fn add_profile<P: MappingProfile>(&mut self, profile: P) -> &mut Self {
        debug!(profile = profile.name(), "adding mapping profile");
        profile.configure(self);
        self.profiles.push(profile.name());
        self
    }

    /// Names of the profiles applied so far, in order.
    pub fn profiles(&self) -> &[&'static str] {
        &self.profiles
    }

    /// Validates the configuration and freezes it into a registry.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::DuplicateMapping`] for the first pair registered
    /// twice, [`MappingError::DuplicateMember`] for the first descriptor with
    /// two rules for one member, and [`MappingError::UnknownMember`] for a rule
    /// naming a member its destination does not declare.
    pub fn build(self) -> Result<MappingRegistry> {
        let mut maps: HashMap<TypePair, Box<dyn ErasedTypeMap>> =
            HashMap::with_capacity(self.maps.len());
        for map in self.maps {
            let pair = map.pair();
            if let Some(member) = map.duplicate_member() {
                return Err(MappingError::DuplicateMember {
                    source_type: pair.source.name(),
                    destination_type: pair.destination.name(),
                    member,
                });
            }
            if let Some(member) = map.unknown_member() {
                return Err(MappingError::UnknownMember {
                    source_type: pair.source.name(),
                    destination_type: pair.destination.name(),
                    member,
                });
            }
            if maps.contains_key(&pair) {
                return Err(MappingError::DuplicateMapping {
                    source_type: pair.source.name(),
                    destination_type: pair.destination.name(),
                });
            }
            maps.insert(pair, map);
        }
        debug!(mappings = maps.len(), "built mapping registry");
        Ok(MappingRegistry { maps })
    }
}

/// Immutable store of descriptors keyed by `(source, destination)` pair.
///
/// # Thread Safety
///
/// The registry is never mutated after [`MappingConfiguration::build`], so a
/// shared reference can be used from any thread without locking.
pub struct MappingRegistry {
    maps: HashMap<TypePair, Box<dyn ErasedTypeMap>>,
}

impl MappingRegistry {
    fn descriptor(&self, pair: &TypePair) -> Result<&dyn ErasedTypeMap> {
        self.maps
            .get(pair)
            .map(|map| &**map)
            .ok_or_else(|| MappingError::UnregisteredMapping {
                source_type: pair.source.name(),
                destination_type: pair.destination.name(),
            })
    }

    /// Maps `source` to a new `D`.
    pub fn map<S: Any, D: Destination>(&self, source: &S) -> Result<D> {
        let pair = TypePair::of::<S, D>();
        trace!(%pair, "map");
        self.descriptor(&pair)?
            .as_any()
            .downcast_ref::<TypeMap<S, D>>()
            .map(|map| map.map(source))
            .ok_or_else(|| MappingError::ConstructionFailure {
                type_name: pair.destination.name().to_string(),
                reason: format!("descriptor registered under {pair} has another type"),
            })
    }

    /// Maps `source` to the destination type identified at runtime.
    pub fn map_to<S: Any>(&self, source: &S, destination: TypeKey) -> Result<Box<dyn MappedValue>> {
        let pair = TypePair::new(TypeKey::of::<S>(), destination);
        trace!(%pair, "map_to");
        self.descriptor(&pair)?
            .map_erased(source)
            .ok_or_else(|| MappingError::ConstructionFailure {
                type_name: destination.name().to_string(),
                reason: format!("descriptor registered under {pair} rejected the source"),
            })
    }

    /// Maps `source` once per destination, in order.
    ///
    /// Fails as a whole on the first unregistered destination.
    pub fn map_many<S: Any>(
        &self,
        source: &S,
        destinations: &[TypeKey],
    ) -> Result<Vec<Box<dyn MappedValue>>> {
        destinations
            .iter()
            .map(|destination| self.map_to(source, *destination))
            .collect()
    }

    pub fn contains<S: Any, D: Any>(&self) -> bool {
        self.maps.contains_key(&TypePair::of::<S, D>())
    }

    pub fn contains_pair(&self, pair: &TypePair) -> bool {
        self.maps.contains_key(pair)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Registered pairs ordered by source then destination type name.
    pub fn pairs(&self) -> Vec<TypePair> {
        let mut pairs: Vec<TypePair> = self.maps.keys().copied().collect();
        pairs.sort_by(|a, b| {
            a.source
                .name()
                .cmp(b.source.name())
                .then_with(|| a.destination.name().cmp(b.destination.name()))
        });
        pairs
    }

    /// Ruled member names of a descriptor, in rule order.
    pub fn members(&self, pair: &TypePair) -> Result<Vec<&'static str>> {
        Ok(self.descriptor(pair)?.members())
    }

    /// Declared destination members that no rule populates.
    ///
    /// These members keep their default value when mapped. Destinations that
    /// declare no members always report an empty list.
    pub fn unmapped_members(&self, pair: &TypePair) -> Result<Vec<&'static str>> {
        let descriptor = self.descriptor(pair)?;
        let ruled = descriptor.members();
        Ok(descriptor
            .declared_members()
            .iter()
            .copied()
            .filter(|member| !ruled.contains(member))
            .collect())
    }
}

impl std::fmt::Debug for MappingRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingRegistry")
            .field("pairs", &self.pairs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug, Default)]
    struct Source {
        name: String,
        count: u32,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Target {
        label: String,
        total: u32,
        note: String,
    }

    impl fmt::Display for Target {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}/{}/{}", self.label, self.total, self.note)
        }
    }

    impl Destination for Target {
        const MEMBERS: &'static [&'static str] = &["label", "total", "note"];
    }

    fn target_map() -> TypeMap<Source, Target> {
        TypeMap::<Source, Target>::new()
            .for_member("label", |s: &Source| s.name.to_uppercase(), |t, v| t.label = v)
            .for_member("total", |s: &Source| s.count * 2, |t, v| t.total = v)
    }

    fn source() -> Source {
        Source {
            name: "abc".to_string(),
            count: 21,
        }
    }

    #[test]
    fn ruled_members_are_derived_and_unruled_keep_default() {
        let mut config = MappingConfiguration::new();
        config.register(target_map());
        let registry = config.build().unwrap();

        let target: Target = registry.map(&source()).unwrap();
        assert_eq!(
            target,
            Target {
                label: "ABC".to_string(),
                total: 42,
                note: String::new(),
            }
        );
    }

    #[test]
    fn typed_and_erased_paths_agree() {
        let mut config = MappingConfiguration::new();
        config.register(target_map());
        let registry = config.build().unwrap();

        let typed: Target = registry.map(&source()).unwrap();
        let erased = registry
            .map_to(&source(), TypeKey::of::<Target>())
            .unwrap();
        assert_eq!((*erased).downcast_ref::<Target>(), Some(&typed));
    }

    #[test]
    fn unregistered_pair_fails() {
        let registry = MappingConfiguration::new().build().unwrap();
        let err = registry.map::<Source, Target>(&source()).unwrap_err();
        assert!(matches!(err, MappingError::UnregisteredMapping { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let mut config = MappingConfiguration::new();
        config.register(target_map()).register(TypeMap::<Source, Target>::new());
        let err = config.build().unwrap_err();
        match err {
            MappingError::DuplicateMapping {
                source_type,
                destination_type,
            } => {
                assert!(source_type.ends_with("Source"));
                assert!(destination_type.ends_with("Target"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_member_is_rejected() {
        let mut config = MappingConfiguration::new();
        config.register(
            target_map().for_member("label", |s: &Source| s.name.clone(), |t, v| t.label = v),
        );
        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            MappingError::DuplicateMember { member: "label", .. }
        ));
    }

    #[test]
    fn rule_for_undeclared_member_is_rejected() {
        let mut config = MappingConfiguration::new();
        config.register(
            TypeMap::<Source, Target>::new()
                .for_member("title", |s: &Source| s.name.clone(), |t, v| t.label = v)
                .for_member("total", |s: &Source| s.count, |t, v| t.total = v),
        );
        let err = config.build().unwrap_err();
        match err {
            MappingError::UnknownMember {
                destination_type,
                member,
                ..
            } => {
                assert_eq!(member, "title");
                assert!(destination_type.ends_with("Target"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undeclared_destination_accepts_any_member_name() {
        #[derive(Debug, Default)]
        struct Open(String);

        impl fmt::Display for Open {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Destination for Open {}

        let mut config = MappingConfiguration::new();
        config.register(TypeMap::<Source, Open>::new().for_member(
            "anything",
            |s: &Source| s.name.clone(),
            |o, v| o.0 = v,
        ));
        let registry = config.build().unwrap();
        let pair = TypePair::of::<Source, Open>();
        assert!(registry.unmapped_members(&pair).unwrap().is_empty());
        assert_eq!(registry.map::<_, Open>(&source()).unwrap().0, "abc");
    }

    #[test]
    fn members_and_unmapped_members_are_reported() {
        let mut config = MappingConfiguration::new();
        config.register(target_map());
        let registry = config.build().unwrap();
        let pair = TypePair::of::<Source, Target>();

        assert_eq!(registry.members(&pair).unwrap(), vec!["label", "total"]);
        assert_eq!(registry.unmapped_members(&pair).unwrap(), vec!["note"]);
        assert!(registry.contains::<Source, Target>());
        assert!(!registry.contains::<Target, Source>());
    }
}
