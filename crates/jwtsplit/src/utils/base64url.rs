//! Base64URL decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate. Only the
//! unpadded URL-safe alphabet is accepted; `=` padding is an error. Like
//! other lenient JWT decoders, non-zero trailing bits are tolerated and
//! `\r`/`\n` line breaks are skipped.

use crate::error::SegmentError;
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use std::borrow::Cow;

/// Unpadded URL-safe engine that ignores trailing bits when decoding
const LENIENT_URL_SAFE_NO_PAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Remove line breaks, borrowing when there are none
fn strip_line_breaks(input: &str) -> Cow<'_, str> {
    if input.contains(['\r', '\n']) {
        Cow::Owned(input.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(input)
    }
}

/// Decode Base64URL string to bytes
pub(crate) fn decode_bytes(input: &str) -> Result<Vec<u8>, SegmentError> {
    Ok(LENIENT_URL_SAFE_NO_PAD.decode(strip_line_breaks(input).as_bytes())?)
}

/// Decode Base64URL string to UTF-8 string
pub(crate) fn decode_string(input: &str) -> Result<String, SegmentError> {
    Ok(String::from_utf8(decode_bytes(input)?)?)
}
