//! Radix decoding into arbitrary-precision integers.
//!
//! A share value is a digit string interpreted in a base between
//! [`MIN_RADIX`] and [`MAX_RADIX`]:
//!
//! ```text
//! decode(16, "1A")  = 26
//! decode(2,  "111") = 7
//! decode(4,  "-213") = -39
//! ```
//!
//! Digits are `0-9` followed by `a-z`, case-insensitive. The string may
//! start with one `+` or `-`. Anything else, including an empty digit
//! sequence, whitespace or digit separators, is rejected.

use num_bigint::{BigInt, BigUint};
use num_traits::Num;
use thiserror::Error;
use tracing::trace;

/// Smallest supported base.
pub const MIN_RADIX: u32 = 2;

/// Largest supported base (`0-9` plus `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Errors that may occur while decoding a share value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The base is not a decimal integer between 2 and 36.
    #[error("invalid base {base:?}: expected an integer between 2 and 36")]
    InvalidBase { base: String },

    /// The digit string is empty or contains a character outside the base.
    #[error("cannot decode value {value:?} in base {base}")]
    MalformedDigits { value: String, base: u32 },
}

/// Parses the decimal representation of a radix.
///
/// Bases travel as strings in share records (`"base": "16"`), so this is
/// the first half of decoding a share.
pub fn parse_radix(base: &str) -> Result<u32, DecodeError> {
    base.parse::<u32>()
        .ok()
        .filter(|radix| (MIN_RADIX..=MAX_RADIX).contains(radix))
        .ok_or_else(|| DecodeError::InvalidBase {
            base: base.to_owned(),
        })
}

/// Decodes `digits` interpreted in `radix`.
///
/// # Errors
///
/// - [`DecodeError::InvalidBase`] if `radix` is outside `2..=36`
/// - [`DecodeError::MalformedDigits`] if `digits` is empty, is only a sign,
///   or contains a character that is not a digit of `radix`
pub fn decode(radix: u32, digits: &str) -> Result<BigInt, DecodeError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(DecodeError::InvalidBase {
            base: radix.to_string(),
        });
    }

    let malformed = || DecodeError::MalformedDigits {
        value: digits.to_owned(),
        base: radix,
    };

    let (negative, magnitude) = match digits.as_bytes().first() {
        Some(b'-') => (true, &digits[1..]),
        Some(b'+') => (false, &digits[1..]),
        _ => (false, digits),
    };

    // `from_str_radix` tolerates `_` separators, so validate first.
    if magnitude.is_empty() || !magnitude.chars().all(|c| c.is_digit(radix)) {
        return Err(malformed());
    }

    let magnitude = BigUint::from_str_radix(magnitude, radix).map_err(|_| malformed())?;
    let value = if negative {
        -BigInt::from(magnitude)
    } else {
        BigInt::from(magnitude)
    };

    trace!(%radix, digits, %value, "decoded value");

    Ok(value)
}

/// Decodes a share value whose base is itself given as a decimal string.
pub fn decode_share(base: &str, value: &str) -> Result<BigInt, DecodeError> {
    decode(parse_radix(base)?, value)
}

/// Encodes `value` in `radix`, using lowercase letters for digits above 9.
///
/// This is the inverse of [`decode`]: `decode(b, &encode(v, b)?) == v`.
pub fn encode(value: &BigInt, radix: u32) -> Result<String, DecodeError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(DecodeError::InvalidBase {
            base: radix.to_string(),
        });
    }

    Ok(value.to_str_radix(radix))
}
