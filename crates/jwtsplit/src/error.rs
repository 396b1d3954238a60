//! Errors for jwtsplit

use thiserror::Error;

/// Why a single segment could not be decoded
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    #[error("Base64URL decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded segment is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// JWTSplit Errors
///
/// Decoding failures after the header carry the text decoded so far, see
/// [`Error::decoded_header`] and [`Error::decoded_payload`].
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Empty JWT")]
    EmptyToken,

    #[error("Malformed JWT: expected three parts separated by '.', found {segments}")]
    MalformedStructure { segments: usize },

    #[error("Malformed JWT header: {source}")]
    MalformedHeader {
        #[source]
        source: SegmentError,
    },

    #[error("Malformed JWT payload: {source}")]
    MalformedPayload {
        header: String,
        #[source]
        source: SegmentError,
    },

    #[error("Malformed JWT signature: {source}")]
    MalformedSignature {
        header: String,
        payload: String,
        #[source]
        source: SegmentError,
    },

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("JWT payload is not a JSON object: {source}")]
    InvalidPayloadFormat {
        #[source]
        source: miniserde::Error,
    },

    #[error("Claim with code '{claim}' not found in JWT's payload")]
    ClaimNotFound { claim: String },

    #[error("Claim with code '{claim}' does not contain number")]
    ClaimNotNumeric { claim: String },

    #[error("Claim with code '{claim}' does not contain int64 value")]
    ClaimOutOfRange { claim: String },
}

/// Discriminant of [`Error`], for matching without destructuring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyToken,
    MalformedStructure,
    MalformedHeader,
    MalformedPayload,
    MalformedSignature,
    InvalidPayloadFormat,
    ClaimNotFound,
    ClaimNotNumeric,
    ClaimOutOfRange,
}

impl Error {
    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyToken => ErrorKind::EmptyToken,
            Error::MalformedStructure { .. } => ErrorKind::MalformedStructure,
            Error::MalformedHeader { .. } => ErrorKind::MalformedHeader,
            Error::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            Error::MalformedSignature { .. } => ErrorKind::MalformedSignature,
            Error::InvalidPayloadFormat { .. } => ErrorKind::InvalidPayloadFormat,
            Error::ClaimNotFound { .. } => ErrorKind::ClaimNotFound,
            Error::ClaimNotNumeric { .. } => ErrorKind::ClaimNotNumeric,
            Error::ClaimOutOfRange { .. } => ErrorKind::ClaimOutOfRange,
        }
    }

    /// Header text decoded before the failure, or `""` if none was
    pub fn decoded_header(&self) -> &str {
        match self {
            Error::MalformedPayload { header, .. } | Error::MalformedSignature { header, .. } => {
                header
            }
            _ => "",
        }
    }

    /// Payload text decoded before the failure, or `""` if none was
    pub fn decoded_payload(&self) -> &str {
        match self {
            Error::MalformedSignature { payload, .. } => payload,
            _ => "",
        }
    }

    /// Name of the claim this error refers to, if any
    pub fn claim(&self) -> Option<&str> {
        match self {
            Error::ClaimNotFound { claim }
            | Error::ClaimNotNumeric { claim }
            | Error::ClaimOutOfRange { claim } => Some(claim),
            _ => None,
        }
    }
}

/// Result type alias for JWTSplit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_partial_accessors() {
        let err = Error::MalformedSignature {
            header: "h".into(),
            payload: "p".into(),
            source: SegmentError::Base64(base64::DecodeError::InvalidLength(1)),
        };
        assert_eq!(err.decoded_header(), "h");
        assert_eq!(err.decoded_payload(), "p");
        assert_eq!(err.kind(), ErrorKind::MalformedSignature);

        let err = Error::MalformedPayload {
            header: "h".into(),
            source: SegmentError::Base64(base64::DecodeError::InvalidLength(1)),
        };
        assert_eq!(err.decoded_header(), "h");
        assert_eq!(err.decoded_payload(), "");

        assert_eq!(Error::EmptyToken.decoded_header(), "");
    }

    #[test]
    fn test_source_is_preserved() {
        let err = Error::MalformedHeader {
            source: SegmentError::Base64(base64::DecodeError::InvalidByte(0, b'!')),
        };
        let source = err.source().expect("header error has a source");
        assert!(source.to_string().contains("Invalid symbol"));
    }

    #[test]
    fn test_claim_accessor() {
        let err = Error::ClaimNotFound { claim: "exp".into() };
        assert_eq!(err.claim(), Some("exp"));
        assert_eq!(
            err.to_string(),
            "Claim with code 'exp' not found in JWT's payload"
        );
        assert_eq!(Error::EmptyToken.claim(), None);
    }
}
