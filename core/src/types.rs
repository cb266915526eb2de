use std::fmt;

use thiserror::Error;

/// Step of the encoder that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStage {
    Write,
    Finish,
}

impl fmt::Display for EncodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeStage::Write  => f.write_str("write data"),
            EncodeStage::Finish => f.write_str("close gzip writer"),
        }
    }
}

/// Step of the decoder that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// Header parse, inflate, or trailer verification.
    Inflate,
    /// Inflated bytes are not UTF-8 (text form only).
    Utf8,
    /// Text container holds a character above U+00FF (text form only).
    TextContainer,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStage::Inflate       => f.write_str("decompress data"),
            DecodeStage::Utf8          => f.write_str("decode text"),
            DecodeStage::TextContainer => f.write_str("read compressed text"),
        }
    }
}

/// Facade error taxonomy.
/// - `InvalidArgument`: caller passed an empty payload.
/// - `Encoding` / `Decoding`: codec failure, cause text preserved in `msg`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GzipError {
    #[error("{arg} cannot be empty")]
    InvalidArgument { arg: &'static str },

    #[error("failed to {stage}: {msg}")]
    Encoding { stage: EncodeStage, msg: String },

    #[error("failed to {stage}: {msg}")]
    Decoding { stage: DecodeStage, msg: String },
}

impl GzipError {
    pub fn encoding(stage: EncodeStage, cause: impl fmt::Display) -> Self {
        GzipError::Encoding { stage, msg: cause.to_string() }
    }

    pub fn decoding(stage: DecodeStage, cause: impl fmt::Display) -> Self {
        GzipError::Decoding { stage, msg: cause.to_string() }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GzipError::InvalidArgument { .. })
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, GzipError::Encoding { .. })
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, GzipError::Decoding { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_cause_text() {
        let err = GzipError::decoding(DecodeStage::Inflate, "invalid gzip header");
        assert_eq!(err.to_string(), "failed to decompress data: invalid gzip header");
        assert!(err.is_decoding());

        let err = GzipError::encoding(EncodeStage::Finish, "out of memory");
        assert_eq!(err.to_string(), "failed to close gzip writer: out of memory");
        assert!(err.is_encoding());
    }

    #[test]
    fn empty_argument_message_names_the_argument() {
        let err = GzipError::InvalidArgument { arg: "input" };
        assert_eq!(err.to_string(), "input cannot be empty");
        assert!(err.is_invalid_argument());
    }
}
