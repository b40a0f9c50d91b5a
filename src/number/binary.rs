//! Decimal to binary conversion.
//!
//! The integer part is converted with repeated division, the fractional part
//! with repeated doubling:
//!
//! ```text
//! 2.625 -> int 2   -> "10"
//!          frac .625 -> 1.25 (1) -> 0.5 (0) -> 1.0 (1) -> ".101"
//!          result "10.101"
//! ```

use thiserror::Error;

/// Largest magnitude accepted for conversion: 2^32.
pub const MAX_BINARY_MAGNITUDE: f64 = 4_294_967_296.0;

/// Maximum number of bits emitted after the binary point.
pub const MAX_FRACTION_BITS: usize = 8;

/// Convert a number to its binary representation.
///
/// Negative numbers keep a leading `-`. Fractional parts are expanded to at
/// most [`MAX_FRACTION_BITS`] bits and stop early once the remainder is exact.
pub fn to_binary(value: f64) -> Result<String, BinaryError> {
    if !value.is_finite() {
        return Err(BinaryError::Unconvertible);
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    if magnitude > MAX_BINARY_MAGNITUDE {
        return Err(BinaryError::TooLarge);
    }

    let int_part = magnitude.trunc();
    let frac_part = magnitude - int_part;

    let mut result = integer_bits(int_part as u64);
    let frac_bits = fraction_bits(frac_part);
    if !frac_bits.is_empty() {
        result.push('.');
        result.push_str(&frac_bits);
    }

    if negative {
        result.insert(0, '-');
    }

    Ok(result)
}

/// Base-2 digits of an integer, most significant first.
fn integer_bits(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut bits = Vec::new();
    while n > 0 {
        bits.push(if n % 2 == 1 { '1' } else { '0' });
        n /= 2;
    }
    bits.iter().rev().collect()
}

/// Bits after the binary point for a fraction in `[0, 1)`.
fn fraction_bits(mut frac: f64) -> String {
    let mut bits = String::new();

    while frac > 0.0 && bits.len() < MAX_FRACTION_BITS {
        frac *= 2.0;
        if frac >= 1.0 {
            bits.push('1');
            frac -= 1.0;
        } else {
            bits.push('0');
        }
    }

    bits
}

/// Errors produced by the binary converter.
///
/// The `Display` text is the sentinel shown in place of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BinaryError {
    #[error("NUMBER TOO LARGE FOR BINARY")]
    TooLarge,

    #[error("CANNOT CONVERT TO BINARY")]
    Unconvertible,
}
