//! Segment decoding for compact JWTs
//!
//! A token is split into its three Base64URL parts, each of which is decoded
//! independently. Nothing is verified and no JSON is parsed here.

use crate::error::{Error, Result};
use crate::utils::base64url;

/// The three decoded segments of a compact JWT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    header: String,
    payload: String,
    signature: Vec<u8>,
}

impl DecodedToken {
    /// Decoded header JSON text
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Decoded payload JSON text
    ///
    /// Note: the signature has not been verified, do not trust this data.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Raw signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Split into `(header, payload, signature)`
    pub fn into_parts(self) -> (String, String, Vec<u8>) {
        (self.header, self.payload, self.signature)
    }
}

/// Decode the header, payload and signature of a compact JWT
///
/// Fails on empty input, on anything other than exactly three `.`-separated
/// parts, and on any part that is not unpadded Base64URL. When the payload or
/// signature is the failing part, the error still carries the text decoded
/// before it.
///
/// # Example
/// ```
/// let token = jwtsplit::decode("eyJhbGciOiJub25lIn0.e30.")?;
/// assert_eq!(token.header(), r#"{"alg":"none"}"#);
/// assert_eq!(token.payload(), "{}");
/// assert!(token.signature().is_empty());
/// # Ok::<(), jwtsplit::Error>(())
/// ```
pub fn decode(token: &str) -> Result<DecodedToken> {
    let result = decode_segments(token);
    match &result {
        Ok(decoded) => tracing::trace!(
            header_len = decoded.header.len(),
            payload_len = decoded.payload.len(),
            signature_len = decoded.signature.len(),
            "decoded JWT"
        ),
        Err(e) => tracing::debug!(
            kind = ?e.kind(),
            segments = token.split('.').count(),
            "rejected JWT: {e}"
        ),
    }
    result
}

fn decode_segments(token: &str) -> Result<DecodedToken> {
    if token.trim().is_empty() {
        return Err(Error::EmptyToken);
    }

    let parts: Vec<&str> = token.split('.').collect();
    let [header_b64, payload_b64, signature_b64] = parts[..] else {
        return Err(Error::MalformedStructure {
            segments: parts.len(),
        });
    };

    let header = base64url::decode_string(header_b64)
        .map_err(|source| Error::MalformedHeader { source })?;

    let payload = match base64url::decode_string(payload_b64) {
        Ok(payload) => payload,
        Err(source) => return Err(Error::MalformedPayload { header, source }),
    };

    let signature = match base64url::decode_bytes(signature_b64) {
        Ok(signature) => signature,
        Err(source) => {
            return Err(Error::MalformedSignature {
                header,
                payload,
                source,
            });
        }
    };

    Ok(DecodedToken {
        header,
        payload,
        signature,
    })
}
