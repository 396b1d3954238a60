//! Structural validation of compact JWTs
//!
//! Only the token shape and segment encoding are checked.

use crate::error::Result;
use crate::token::decode;

/// Check that `token` is a well-formed compact JWT
///
/// Succeeds exactly when [`decode`] does and returns the same error otherwise.
/// The signature is not verified.
pub fn validate(token: &str) -> Result<()> {
    decode(token).map(|_| ())
}
