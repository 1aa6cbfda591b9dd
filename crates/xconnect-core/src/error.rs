use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("no record with id {id:?}")]
    NotFound { id: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("encode failed: {0}")]
    Encode(String),
}

/// The key-value service could not complete a get/set/remove.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("stored value for {key:?} is not valid utf-8")]
    InvalidUtf8 { key: String },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeReason {
    InvalidJson,
    InvalidShape,
}

impl DecodeReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid-json",
            Self::InvalidShape => "invalid-shape",
        }
    }
}

impl fmt::Display for DecodeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Malformed text at a decode boundary (codec, exchange ingestion, bulk import).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}: {detail}")]
pub struct DecodeError {
    pub reason: DecodeReason,
    pub detail: String,
}

impl DecodeError {
    pub fn invalid_json(detail: impl Into<String>) -> Self {
        Self {
            reason: DecodeReason::InvalidJson,
            detail: detail.into(),
        }
    }

    pub fn invalid_shape(detail: impl Into<String>) -> Self {
        Self {
            reason: DecodeReason::InvalidShape,
            detail: detail.into(),
        }
    }
}

impl Error {
    /// The decode reason, if this error came from a decode boundary.
    pub fn decode_reason(&self) -> Option<DecodeReason> {
        match self {
            Self::Decode(e) => Some(e.reason),
            Self::Storage(_) | Self::NotFound { .. } | Self::Encode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_leads_with_reason_tag() {
        let e = DecodeError::invalid_shape("expected array");
        assert_eq!(e.to_string(), "invalid-shape: expected array");
        let e = DecodeError::invalid_json("eof");
        assert_eq!(e.to_string(), "invalid-json: eof");
    }

    #[test]
    fn decode_reason_survives_conversion_into_error() {
        let e: Error = DecodeError::invalid_json("x").into();
        assert_eq!(e.decode_reason(), Some(DecodeReason::InvalidJson));
        let e = Error::NotFound { id: "7".to_string() };
        assert_eq!(e.decode_reason(), None);
        assert_eq!(e.to_string(), "no record with id \"7\"");
    }
}
