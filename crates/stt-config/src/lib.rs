#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod logging;

use serde::Deserialize;
use stt::TranscriptionOptions;

pub use logging::*;

/// Top-level configuration file
///
/// ```toml
/// [transcription]
/// model = "paraformer-v2"
/// format = "wav"
/// language_hints = ["zh", "en"]
///
/// [logging]
/// filter = "info"
/// format = "compact"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default options for every transcription request, keyed by wire name
    #[serde(default)]
    pub transcription: TranscriptionOptions,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
