//! Numeric bounds for claim coercion

/// Smallest float that converts to `i64` without saturating (-2^63)
pub(crate) const MIN_TIMESTAMP_F64: f64 = i64::MIN as f64;

/// First float past `i64::MAX` (2^63); the valid range excludes it
pub(crate) const MAX_TIMESTAMP_F64_EXCLUSIVE: f64 = -(i64::MIN as f64);
