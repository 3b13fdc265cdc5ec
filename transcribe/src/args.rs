use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use stt::{AudioFormat, TranscriptionOptions};

/// Render the request payload for a paraformer transcription call
#[derive(Debug, Parser)]
#[command(name = "transcribe", about = "Render transcription request options as JSON")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "TRANSCRIBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub overrides: Overrides,
}

/// Per-invocation overrides of the configured transcription options
#[derive(Debug, ClapArgs)]
pub struct Overrides {
    /// Model identifier (e.g. "paraformer-v2")
    #[arg(long)]
    pub model: Option<String>,

    /// Custom vocabulary ID
    #[arg(long)]
    pub vocabulary_id: Option<String>,

    #[arg(long)]
    pub resource_id: Option<String>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Audio format (pcm, wav, mp3, opus, speex, aac, amr)
    #[arg(long)]
    pub format: Option<AudioFormat>,

    /// Channel index to transcribe, repeat for several
    #[arg(long = "channel-id")]
    pub channel_ids: Vec<u32>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub disfluency_removal: Option<bool>,

    /// Request word-level timestamps
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub timestamp_alignment: Option<bool>,

    #[arg(long)]
    pub special_word_filter: Option<String>,

    /// Language code hint, repeat for several
    #[arg(long = "language-hint")]
    pub language_hints: Vec<String>,

    /// Split the transcript by speaker
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub diarization: Option<bool>,

    #[arg(long)]
    pub speaker_count: Option<u32>,
}

impl Overrides {
    /// Derive options from `base`, replacing every field given on the command line
    pub fn apply(&self, base: &TranscriptionOptions) -> TranscriptionOptions {
        let mut builder = base.to_builder();

        if let Some(model) = &self.model {
            builder = builder.with_model(model);
        }
        if let Some(vocabulary_id) = &self.vocabulary_id {
            builder = builder.with_vocabulary_id(vocabulary_id);
        }
        if let Some(resource_id) = &self.resource_id {
            builder = builder.with_resource_id(resource_id);
        }
        if let Some(sample_rate) = self.sample_rate {
            builder = builder.with_sample_rate(sample_rate);
        }
        if let Some(format) = self.format {
            builder = builder.with_format(format);
        }
        if !self.channel_ids.is_empty() {
            builder = builder.with_channel_id(self.channel_ids.iter().copied());
        }
        if let Some(enabled) = self.disfluency_removal {
            builder = builder.with_disfluency_removal_enabled(enabled);
        }
        if let Some(enabled) = self.timestamp_alignment {
            builder = builder.with_timestamp_alignment_enabled(enabled);
        }
        if let Some(filter) = &self.special_word_filter {
            builder = builder.with_special_word_filter(filter);
        }
        if !self.language_hints.is_empty() {
            builder = builder.with_language_hints(&self.language_hints);
        }
        if let Some(enabled) = self.diarization {
            builder = builder.with_diarization_enabled(enabled);
        }
        if let Some(speaker_count) = self.speaker_count {
            builder = builder.with_speaker_count(speaker_count);
        }

        builder.build()
    }
}
