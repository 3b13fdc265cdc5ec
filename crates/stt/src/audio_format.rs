use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

use crate::error::SttError;

/// Audio encodings accepted by the transcription service
///
/// The wire string of every variant is its lowercase name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AudioFormat {
    /// Raw PCM samples
    Pcm,
    /// RIFF/WAVE container
    Wav,
    /// MPEG-1 Audio Layer III
    Mp3,
    Opus,
    Speex,
    /// Advanced Audio Coding
    Aac,
    /// Adaptive Multi-Rate
    Amr,
}

impl AudioFormat {
    /// Wire string sent to the service
    pub fn value(self) -> &'static str {
        self.into()
    }

    /// Iterate over every supported format
    pub fn iter() -> AudioFormatIter {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

impl FromStr for AudioFormat {
    type Err = SttError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|format| format.value() == s)
            .ok_or_else(|| SttError::UnsupportedFormat(s.to_string()))
    }
}
