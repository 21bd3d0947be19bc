//! The four demonstration scenarios.
//!
//! 1. Map into a `(ModelB, ModelB)` tuple and destructure it.
//! 2. Map into a `(ModelB, ModelB, ModelC)` tuple.
//! 3. Map into a dynamic bag (`Item1..Item4`), which has no arity limit.
//! 4. Map into a plain list, one value per requested destination.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use tuplemap_map::{MappingRegistry, map_dynamic, map_tuple, type_keys};
use tuplemap_model::{ModelA, ModelB, ModelC};

use crate::transcript::Transcript;

/// Runs every scenario against `registry` and collects the transcript.
pub fn run_scenarios(registry: &MappingRegistry, source: &ModelA) -> Result<Transcript> {
    let span = info_span!("scenarios", source = %source);
    let _guard = span.enter();
    let mut transcript = Transcript::new();

    let (b1, b2): (ModelB, ModelB) =
        map_tuple(registry, source).context("scenario 1: map to (B, B)")?;
    transcript
        .section("Result 1")
        .line("b1", &b1)
        .line("b2", &b2);
    info!(scenario = 1, "mapped pair tuple");

    let (b3, b4, c1): (ModelB, ModelB, ModelC) =
        map_tuple(registry, source).context("scenario 2: map to (B, B, C)")?;
    transcript
        .section("Result 2")
        .line("b3", &b3)
        .line("b4", &b4)
        .line("c1", &c1);
    info!(scenario = 2, "mapped triple tuple");

    let destinations = type_keys![ModelB, ModelB, ModelC, ModelC];

    let bag = map_dynamic(registry, source, &destinations)
        .context("scenario 3: map to dynamic bag")?;
    let section = transcript.section("Result 3");
    for (key, value) in bag.iter() {
        section.line(key, value);
    }
    info!(scenario = 3, items = bag.len(), "mapped dynamic bag");

    let values = registry
        .map_many(source, &destinations)
        .context("scenario 4: map to list")?;
    let section = transcript.section("Result 4").compact();
    for value in &values {
        section.line("Item ?", value);
    }
    info!(scenario = 4, items = values.len(), "mapped list");

    Ok(transcript)
}

/// Reports registered destinations whose declared members have no rule.
///
/// Returns the findings as `(pair, members)` descriptions; each is also
/// logged at `warn`.
pub fn check_unmapped_members(registry: &MappingRegistry) -> Result<Vec<String>> {
    let mut findings = Vec::new();
    for pair in registry.pairs() {
        let unmapped = registry.unmapped_members(&pair)?;
        if unmapped.is_empty() {
            continue;
        }
        let finding = format!(
            "{} -> {}: {}",
            pair.source.short_name(),
            pair.destination.short_name(),
            unmapped.join(", ")
        );
        warn!(%finding, "destination members without a rule keep their default");
        findings.push(finding);
    }
    Ok(findings)
}

/// Collects unmapped-member findings and, when `strict`, fails on any.
pub fn ensure_no_unmapped(registry: &MappingRegistry, strict: bool) -> Result<Vec<String>> {
    let findings = check_unmapped_members(registry)?;
    if strict && !findings.is_empty() {
        bail!(
            "destination members without a rule: {}",
            findings.join("; ")
        );
    }
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use tuplemap_map::{DemoProfile, MappingConfiguration, TypeMap};

    use super::*;

    fn demo_registry() -> MappingRegistry {
        let mut config = MappingConfiguration::new();
        config.add_profile(DemoProfile);
        config.build().unwrap()
    }

    #[test]
    fn scenarios_produce_thirteen_lines() {
        let transcript = run_scenarios(&demo_registry(), &ModelA::new("a", "b")).unwrap();
        let titles: Vec<&str> = transcript
            .sections
            .iter()
            .map(|section| section.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Result 1", "Result 2", "Result 3", "Result 4"]);
        assert_eq!(transcript.line_count(), 13);
    }

    #[test]
    fn missing_mapping_fails_with_scenario_context() {
        let mut config = MappingConfiguration::new();
        config.register(TypeMap::<ModelA, ModelB>::new());
        let registry = config.build().unwrap();

        let err = run_scenarios(&registry, &ModelA::new("a", "b")).unwrap_err();
        assert_eq!(err.to_string(), "scenario 2: map to (B, B, C)");
    }

    #[test]
    fn demo_profile_has_no_unmapped_members() {
        assert!(check_unmapped_members(&demo_registry()).unwrap().is_empty());
    }

    #[test]
    fn empty_descriptor_is_reported() {
        let mut config = MappingConfiguration::new();
        config.register(TypeMap::<ModelA, ModelC>::new());
        let registry = config.build().unwrap();

        let findings = check_unmapped_members(&registry).unwrap();
        assert_eq!(findings, vec!["ModelA -> ModelC: field5, field6"]);
    }

    #[test]
    fn strict_mode_fails_on_unmapped_members() {
        let mut config = MappingConfiguration::new();
        config.register(TypeMap::<ModelA, ModelC>::new());
        let registry = config.build().unwrap();

        let err = ensure_no_unmapped(&registry, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "destination members without a rule: ModelA -> ModelC: field5, field6"
        );

        let findings = ensure_no_unmapped(&registry, false).unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn strict_mode_passes_complete_profile() {
        assert!(ensure_no_unmapped(&demo_registry(), true).unwrap().is_empty());
    }
}
