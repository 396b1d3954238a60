//! Claim extraction from the JWT payload
//!
//! The payload is parsed into a dynamically typed JSON object, and single
//! claims are looked up by name and type-checked locally.

use crate::error::{Error, Result};
use crate::limits::{MAX_TIMESTAMP_F64_EXCLUSIVE, MIN_TIMESTAMP_F64};
use crate::token::decode;
use miniserde::json::{Number, Object, Value};

/// Decode a token and parse its payload as a JSON object
///
/// A `null` payload yields an empty object; any other non-object JSON value
/// is rejected.
pub fn decode_claims(token: &str) -> Result<Object> {
    let decoded = decode(token)?;
    if decoded.payload().trim() == "null" {
        return Ok(Object::new());
    }
    miniserde::json::from_str(decoded.payload())
        .map_err(|source| Error::InvalidPayloadFormat { source })
}

/// Read the claim named `claim` as a Unix timestamp
///
/// Useful for the standard `iat`, `nbf` and `exp` claims. Fractional values
/// are rounded half away from zero; the result must fit in an `i64`.
///
/// # Example
/// ```
/// // {"alg":"none"}.{"iat":1516239022}.
/// let token = "eyJhbGciOiJub25lIn0.eyJpYXQiOjE1MTYyMzkwMjJ9.";
/// assert_eq!(jwtsplit::extract_timestamp(token, "iat")?, 1516239022);
/// # Ok::<(), jwtsplit::Error>(())
/// ```
pub fn extract_timestamp(token: &str, claim: &str) -> Result<i64> {
    let claims = decode_claims(token)?;

    match claims.get(claim) {
        None => Err(Error::ClaimNotFound {
            claim: claim.to_string(),
        }),
        Some(Value::Number(number)) => {
            number_to_timestamp(number).ok_or_else(|| Error::ClaimOutOfRange {
                claim: claim.to_string(),
            })
        }
        Some(_) => Err(Error::ClaimNotNumeric {
            claim: claim.to_string(),
        }),
    }
}

fn number_to_timestamp(number: &Number) -> Option<i64> {
    match *number {
        Number::I64(value) => Some(value),
        Number::U64(value) => i64::try_from(value).ok(),
        Number::F64(value) => {
            let rounded = value.round();
            // NaN fails both comparisons
            if (MIN_TIMESTAMP_F64..MAX_TIMESTAMP_F64_EXCLUSIVE).contains(&rounded) {
                Some(rounded as i64)
            } else {
                None
            }
        }
    }
}
