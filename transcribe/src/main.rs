#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use stt_config::Config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    stt_telemetry::init(&config.logging, "info")?;

    if let Some(path) = &args.config {
        tracing::info!(config_path = %path.display(), "using configuration file");
    }

    let options = args.overrides.apply(&config.transcription);

    let payload = if args.compact {
        options.to_json()?
    } else {
        options.to_json_pretty()?
    };

    println!("{payload}");

    Ok(())
}
