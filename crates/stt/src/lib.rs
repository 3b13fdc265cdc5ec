//! Request options for the paraformer speech-recognition API
//!
//! [`TranscriptionOptions`] holds every tunable parameter of a transcription
//! call and renders them as the key-value payload the service expects. Only
//! present fields are emitted.
//!
//! ```
//! use stt::{AudioFormat, TranscriptionOptions};
//!
//! let options = TranscriptionOptions::builder()
//!     .with_model("paraformer-v2")
//!     .with_format(AudioFormat::Wav)
//!     .build();
//!
//! let payload = options.to_payload().unwrap();
//! assert_eq!(payload["format"], "wav");
//! ```

#![allow(
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]

mod audio_format;
mod error;
mod options;
mod payload;

pub use audio_format::{AudioFormat, AudioFormatIter};
pub use error::{Result, SttError};
pub use options::{AudioTranscriptionOptions, TranscriptionOptions, TranscriptionOptionsBuilder};
pub use payload::Payload;
