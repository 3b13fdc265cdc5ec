use serde_json::{Map, Value};

use crate::{
    error::{Result, SttError},
    options::TranscriptionOptions,
};

/// Wire form of transcription options: wire key to value, absent fields omitted
pub type Payload = Map<String, Value>;

impl TranscriptionOptions {
    /// Render the options as the key-value payload sent to the service
    ///
    /// # Errors
    ///
    /// Returns [`SttError::Serialization`] if the options cannot be encoded
    pub fn to_payload(&self) -> Result<Payload> {
        let Value::Object(payload) = serde_json::to_value(self)? else {
            return Err(SttError::Serialization(serde::ser::Error::custom(
                "transcription options did not encode as an object",
            )));
        };

        tracing::debug!(keys = payload.len(), "rendered transcription payload");

        Ok(payload)
    }

    /// Render the payload as single-line JSON, keys in field order
    ///
    /// # Errors
    ///
    /// Returns [`SttError::Serialization`] if the options cannot be encoded
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the payload as indented JSON, keys in field order
    ///
    /// # Errors
    ///
    /// Returns [`SttError::Serialization`] if the options cannot be encoded
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild options from a payload
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SttError::Serialization`] on unknown keys or mistyped values
    pub fn from_payload(payload: Payload) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(payload))?)
    }

    /// Rebuild options from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`SttError::Serialization`] on malformed JSON, unknown keys or
    /// mistyped values
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
