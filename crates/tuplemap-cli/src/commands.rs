use anyhow::{Context, Result};
use tracing::info;

use tuplemap_cli::demo::{ensure_no_unmapped, run_scenarios};
use tuplemap_cli::summary::print_profiles;
use tuplemap_cli::transcript::{Transcript, TranscriptFormat};
use tuplemap_map::{DemoProfile, MappingConfiguration, MappingProfile, initialize};
use tuplemap_model::ModelA;

use crate::cli::{RunArgs, TranscriptFormatArg};

pub fn run_demo(args: &RunArgs) -> Result<Transcript> {
    let registry = initialize(|config| {
        config.add_profile(DemoProfile);
    })
    .context("initialize mapping registry")?;
    info!(pairs = registry.len(), "mapping registry ready");

    ensure_no_unmapped(registry, args.strict)?;

    let source = ModelA::new(args.field1.as_str(), args.field2.as_str());
    run_scenarios(registry, &source)
}

pub fn print_transcript(transcript: &Transcript, format: TranscriptFormatArg) -> Result<()> {
    let format = match format {
        TranscriptFormatArg::Text => TranscriptFormat::Text,
        TranscriptFormatArg::Json => TranscriptFormat::Json,
    };
    let rendered = transcript
        .render(format)
        .context("serialize transcript")?;
    match format {
        TranscriptFormat::Text => print!("{rendered}"),
        TranscriptFormat::Json => println!("{rendered}"),
    }
    Ok(())
}

pub fn run_profiles() -> Result<()> {
    let mut config = MappingConfiguration::new();
    config.add_profile(DemoProfile);
    let profiles: Vec<&str> = config.profiles().to_vec();
    info!(profile = DemoProfile.name(), "listing registered mappings");
    let registry = config.build().context("build mapping registry")?;
    print_profiles(&registry, &profiles)?;
    Ok(())
}
