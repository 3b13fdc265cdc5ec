use serde::{Deserialize, Serialize};

use crate::audio_format::AudioFormat;

/// Provider-agnostic view of transcription options
///
/// Request layers that only need the model identifier program against this
/// trait instead of a concrete options type.
pub trait AudioTranscriptionOptions {
    /// Identifier of the model that should perform the transcription
    fn model(&self) -> Option<&str>;
}

/// Parameters of a single transcription request
///
/// Values are read-only once built. Use [`TranscriptionOptions::builder`] to
/// construct one, and [`TranscriptionOptions::to_builder`] to derive a copy
/// with some fields replaced.
///
/// Absent optional fields and disabled flags are left out of the serialized
/// payload. `channel_id` and `language_hints` are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    vocabulary_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_rate: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<AudioFormat>,

    #[serde(default = "default_channel_id")]
    channel_id: Vec<u32>,

    #[serde(default, skip_serializing_if = "is_false")]
    disfluency_removal_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    timestamp_alignment_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    special_word_filter: Option<String>,

    #[serde(default = "default_language_hints")]
    language_hints: Vec<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    diarization_enabled: bool,

    /// Only meaningful together with `diarization_enabled`; not checked here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speaker_count: Option<u32>,
}

fn default_channel_id() -> Vec<u32> {
    vec![0]
}

fn default_language_hints() -> Vec<String> {
    vec!["zh".to_string(), "en".to_string()]
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self {
            model: None,
            vocabulary_id: None,
            resource_id: None,
            sample_rate: None,
            format: None,
            channel_id: default_channel_id(),
            disfluency_removal_enabled: false,
            timestamp_alignment_enabled: false,
            special_word_filter: None,
            language_hints: default_language_hints(),
            diarization_enabled: false,
            speaker_count: None,
        }
    }
}

impl TranscriptionOptions {
    /// Options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building options from the defaults
    pub fn builder() -> TranscriptionOptionsBuilder {
        TranscriptionOptionsBuilder::default()
    }

    /// Start building a modified copy of these options
    ///
    /// `self` is left untouched.
    pub fn to_builder(&self) -> TranscriptionOptionsBuilder {
        TranscriptionOptionsBuilder { options: self.clone() }
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Custom vocabulary (hotword set) to bias recognition towards
    pub fn vocabulary_id(&self) -> Option<&str> {
        self.vocabulary_id.as_deref()
    }

    /// Provisioned resource the request should run against
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    /// Audio sample rate in Hz
    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    pub fn format(&self) -> Option<AudioFormat> {
        self.format
    }

    /// Audio channel indices to transcribe
    pub fn channel_id(&self) -> &[u32] {
        &self.channel_id
    }

    /// Whether filler words are stripped from the transcript
    pub fn disfluency_removal_enabled(&self) -> bool {
        self.disfluency_removal_enabled
    }

    /// Whether word-level timestamps are requested
    pub fn timestamp_alignment_enabled(&self) -> bool {
        self.timestamp_alignment_enabled
    }

    pub fn special_word_filter(&self) -> Option<&str> {
        self.special_word_filter.as_deref()
    }

    /// Language codes the recognizer should expect, in priority order
    pub fn language_hints(&self) -> &[String] {
        &self.language_hints
    }

    /// Whether the transcript is split by speaker
    pub fn diarization_enabled(&self) -> bool {
        self.diarization_enabled
    }

    /// Expected number of speakers
    pub fn speaker_count(&self) -> Option<u32> {
        self.speaker_count
    }
}

impl AudioTranscriptionOptions for TranscriptionOptions {
    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

/// Fluent builder for [`TranscriptionOptions`]
///
/// Every `with_*` call overwrites the previous value of its field. `build`
/// consumes the builder, so a returned value can never change afterwards.
#[derive(Debug, Clone, Default)]
pub struct TranscriptionOptionsBuilder {
    options: TranscriptionOptions,
}

impl TranscriptionOptionsBuilder {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.options.model = Some(model.into());
        self
    }

    pub fn with_vocabulary_id(mut self, vocabulary_id: impl Into<String>) -> Self {
        self.options.vocabulary_id = Some(vocabulary_id.into());
        self
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.options.resource_id = Some(resource_id.into());
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.options.sample_rate = Some(sample_rate);
        self
    }

    pub fn with_format(mut self, format: AudioFormat) -> Self {
        self.options.format = Some(format);
        self
    }

    /// Replace the channel list; an empty list is stored as given
    pub fn with_channel_id(mut self, channel_id: impl IntoIterator<Item = u32>) -> Self {
        self.options.channel_id = channel_id.into_iter().collect();
        self
    }

    pub fn with_disfluency_removal_enabled(mut self, enabled: bool) -> Self {
        self.options.disfluency_removal_enabled = enabled;
        self
    }

    pub fn with_timestamp_alignment_enabled(mut self, enabled: bool) -> Self {
        self.options.timestamp_alignment_enabled = enabled;
        self
    }

    pub fn with_special_word_filter(mut self, filter: impl Into<String>) -> Self {
        self.options.special_word_filter = Some(filter.into());
        self
    }

    /// Replace the language hints; an empty list is stored as given
    pub fn with_language_hints<I, S>(mut self, language_hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.language_hints = language_hints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_diarization_enabled(mut self, enabled: bool) -> Self {
        self.options.diarization_enabled = enabled;
        self
    }

    pub fn with_speaker_count(mut self, speaker_count: u32) -> Self {
        self.options.speaker_count = Some(speaker_count);
        self
    }

    pub fn clear_model(mut self) -> Self {
        self.options.model = None;
        self
    }

    pub fn clear_vocabulary_id(mut self) -> Self {
        self.options.vocabulary_id = None;
        self
    }

    pub fn clear_resource_id(mut self) -> Self {
        self.options.resource_id = None;
        self
    }

    pub fn clear_sample_rate(mut self) -> Self {
        self.options.sample_rate = None;
        self
    }

    pub fn clear_format(mut self) -> Self {
        self.options.format = None;
        self
    }

    pub fn clear_special_word_filter(mut self) -> Self {
        self.options.special_word_filter = None;
        self
    }

    pub fn clear_speaker_count(mut self) -> Self {
        self.options.speaker_count = None;
        self
    }

    /// Finish building
    pub fn build(self) -> TranscriptionOptions {
        tracing::debug!(
            model = ?self.options.model,
            format = ?self.options.format,
            "transcription options built"
        );

        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = TranscriptionOptions::builder().build();

        assert_eq!(options.model(), None);
        assert_eq!(options.vocabulary_id(), None);
        assert_eq!(options.resource_id(), None);
        assert_eq!(options.sample_rate(), None);
        assert_eq!(options.format(), None);
        assert_eq!(options.channel_id(), [0]);
        assert!(!options.disfluency_removal_enabled());
        assert!(!options.timestamp_alignment_enabled());
        assert_eq!(options.special_word_filter(), None);
        assert_eq!(options.language_hints(), ["zh", "en"]);
        assert!(!options.diarization_enabled());
        assert_eq!(options.speaker_count(), None);
    }

    #[test]
    fn new_and_builder_agree() {
        assert_eq!(TranscriptionOptions::new(), TranscriptionOptions::builder().build());
        assert_eq!(TranscriptionOptions::new(), TranscriptionOptions::default());
    }

    #[test]
    fn every_field_reads_back() {
        let options = TranscriptionOptions::builder()
            .with_model("paraformer-v2")
            .with_vocabulary_id("vocab-123")
            .with_resource_id("res-456")
            .with_sample_rate(16_000)
            .with_format(AudioFormat::Wav)
            .with_channel_id([0, 1])
            .with_disfluency_removal_enabled(true)
            .with_timestamp_alignment_enabled(true)
            .with_special_word_filter("{\"filter_with_signed\":{}}")
            .with_language_hints(["ja"])
            .with_diarization_enabled(true)
            .with_speaker_count(3)
            .build();

        assert_eq!(options.model(), Some("paraformer-v2"));
        assert_eq!(options.vocabulary_id(), Some("vocab-123"));
        assert_eq!(options.resource_id(), Some("res-456"));
        assert_eq!(options.sample_rate(), Some(16_000));
        assert_eq!(options.format(), Some(AudioFormat::Wav));
        assert_eq!(options.channel_id(), [0, 1]);
        assert!(options.disfluency_removal_enabled());
        assert!(options.timestamp_alignment_enabled());
        assert_eq!(options.special_word_filter(), Some("{\"filter_with_signed\":{}}"));
        assert_eq!(options.language_hints(), ["ja"]);
        assert!(options.diarization_enabled());
        assert_eq!(options.speaker_count(), Some(3));
    }

    #[test]
    fn values_stored_verbatim() {
        let options = TranscriptionOptions::builder()
            .with_model("")
            .with_sample_rate(0)
            .with_speaker_count(u32::MAX)
            .with_channel_id([])
            .with_language_hints(Vec::<String>::new())
            .build();

        assert_eq!(options.model(), Some(""));
        assert_eq!(options.sample_rate(), Some(0));
        assert_eq!(options.speaker_count(), Some(u32::MAX));
        assert!(options.channel_id().is_empty());
        assert!(options.language_hints().is_empty());
    }

    #[test]
    fn last_write_wins() {
        let options = TranscriptionOptions::builder()
            .with_model("first")
            .with_format(AudioFormat::Mp3)
            .with_model("second")
            .with_diarization_enabled(true)
            .with_format(AudioFormat::Opus)
            .with_diarization_enabled(false)
            .build();

        assert_eq!(options.model(), Some("second"));
        assert_eq!(options.format(), Some(AudioFormat::Opus));
        assert!(!options.diarization_enabled());
    }

    #[test]
    fn order_independent_across_fields() {
        let a = TranscriptionOptions::builder()
            .with_model("m")
            .with_speaker_count(2)
            .with_sample_rate(8_000)
            .build();
        let b = TranscriptionOptions::builder()
            .with_sample_rate(8_000)
            .with_model("m")
            .with_speaker_count(2)
            .build();

        assert_eq!(a, b);
    }

    #[test]
    fn speaker_count_without_diarization_is_accepted() {
        let options = TranscriptionOptions::builder().with_speaker_count(4).build();

        assert!(!options.diarization_enabled());
        assert_eq!(options.speaker_count(), Some(4));
    }

    #[test]
    fn to_builder_leaves_original_untouched() {
        let original = TranscriptionOptions::builder()
            .with_model("paraformer-v1")
            .with_format(AudioFormat::Pcm)
            .build();

        let derived = original
            .to_builder()
            .with_model("paraformer-v2")
            .clear_format()
            .with_timestamp_alignment_enabled(true)
            .build();

        assert_eq!(original.model(), Some("paraformer-v1"));
        assert_eq!(original.format(), Some(AudioFormat::Pcm));
        assert!(!original.timestamp_alignment_enabled());

        assert_eq!(derived.model(), Some("paraformer-v2"));
        assert_eq!(derived.format(), None);
        assert!(derived.timestamp_alignment_enabled());
    }

    #[test]
    fn clear_resets_optional_fields() {
        let options = TranscriptionOptions::builder()
            .with_model("m")
            .with_vocabulary_id("v")
            .with_resource_id("r")
            .with_sample_rate(1)
            .with_format(AudioFormat::Aac)
            .with_special_word_filter("f")
            .with_speaker_count(1)
            .build()
            .to_builder()
            .clear_model()
            .clear_vocabulary_id()
            .clear_resource_id()
            .clear_sample_rate()
            .clear_format()
            .clear_special_word_filter()
            .clear_speaker_count()
            .build();

        assert_eq!(options, TranscriptionOptions::default());
    }

    #[test]
    fn builder_clones_are_independent() {
        let base = TranscriptionOptions::builder().with_model("base");
        let first = base.clone().build();
        let second = base.with_model("changed").build();

        assert_eq!(first.model(), Some("base"));
        assert_eq!(second.model(), Some("changed"));
    }

    #[test]
    fn trait_exposes_model() {
        fn model_of(options: &impl AudioTranscriptionOptions) -> Option<&str> {
            options.model()
        }

        let options = TranscriptionOptions::builder().with_model("paraformer-8k-v1").build();
        assert_eq!(model_of(&options), Some("paraformer-8k-v1"));
        assert_eq!(model_of(&TranscriptionOptions::new()), None);
    }
}
