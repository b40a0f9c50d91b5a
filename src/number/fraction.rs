//! Decimal to fraction conversion.
//!
//! Works on the shortest round-trip decimal representation of the value.
//! Fractional digits that tile with a short prefix pattern are treated as a
//! repeating decimal and solved algebraically:
//!
//! ```text
//! 0.142857142857... = 142857 / 999999 = 1/7
//! 2.333...          = 2 + 3/9         = 7/3
//! ```
//!
//! Anything else is read as a terminating decimal (`1.25 = 125/100 = 5/4`).

use thiserror::Error;

/// Values with a larger magnitude are refused.
pub const MAX_FRACTION_MAGNITUDE: f64 = 1e10;

/// Largest denominator shown after simplification.
pub const MAX_DENOMINATOR: i128 = 1_000_000;

/// Convert a number to a lowest-terms fraction string.
///
/// Zero renders as `"0/1"`. Integers, and fractions that simplify to a
/// denominator of one, render as a bare integer.
pub fn to_fraction(value: f64) -> Result<String, FractionError> {
    if !value.is_finite() {
        return Err(FractionError::Unconvertible);
    }

    if value == 0.0 {
        return Ok("0/1".to_string());
    }

    if value.abs() > MAX_FRACTION_MAGNITUDE {
        return Err(FractionError::TooLarge);
    }

    if value.fract() == 0.0 {
        return Ok(format!("{:.0}", value));
    }

    let (numerator, denominator) = decimal_to_ratio(value.abs())?;
    let (mut num, den) = simplify(numerator, denominator);
    if value < 0.0 {
        num = -num;
    }

    if den > MAX_DENOMINATOR {
        return Err(FractionError::TooComplex);
    }

    if den == 1 {
        Ok(num.to_string())
    } else {
        Ok(format!("{}/{}", num, den))
    }
}

/// Split a positive value's decimal digits and build an unsimplified ratio.
fn decimal_to_ratio(magnitude: f64) -> Result<(i128, i128), FractionError> {
    let repr = magnitude.to_string();
    let (int_digits, frac_digits) = repr
        .split_once('.')
        .ok_or(FractionError::Unconvertible)?;
    let frac_digits = frac_digits.trim_end_matches('0');

    if frac_digits.is_empty() {
        return Ok((parse_digits(int_digits)?, 1));
    }

    match detect_repetition(frac_digits) {
        Some(width) => repeating_ratio(int_digits, &frac_digits[..width]),
        None => terminating_ratio(int_digits, frac_digits),
    }
}

/// Find the length of the shortest prefix pattern that tiles `digits`.
///
/// The pattern must occur twice in a row at the start, and every full window
/// before the final one must match it. The final window is left unchecked
/// since the shortest representation rounds its last digit. A run of zeros is
/// not a repetition: `0.001` terminates.
fn detect_repetition(digits: &str) -> Option<usize> {
    let bytes = digits.as_bytes();
    let len = bytes.len();
    if len < 2 {
        return None;
    }

    (1..=len / 2).find(|&width| {
        let pattern = &bytes[..width];
        pattern.iter().any(|&b| b != b'0')
            && &bytes[width..2 * width] == pattern
            && (0..len - width)
                .step_by(width)
                .all(|i| &bytes[i..i + width] == pattern)
    })
}

/// Ratio for `int.(pattern)...`, i.e. `int + pattern / (10^width - 1)`.
fn repeating_ratio(int_digits: &str, pattern: &str) -> Result<(i128, i128), FractionError> {
    let denominator = pow10(pattern.len())? - 1;
    let whole = parse_digits(int_digits)?
        .checked_mul(denominator)
        .ok_or(FractionError::Unconvertible)?;
    let numerator = parse_digits(pattern)?
        .checked_add(whole)
        .ok_or(FractionError::Unconvertible)?;

    Ok((numerator, denominator))
}

/// Ratio for a terminating decimal `int.frac`.
fn terminating_ratio(int_digits: &str, frac_digits: &str) -> Result<(i128, i128), FractionError> {
    let numerator = parse_digits(&format!("{}{}", int_digits, frac_digits))?;
    let denominator = pow10(frac_digits.len())?;
    Ok((numerator, denominator))
}

/// Reduce a fraction to lowest terms with a positive denominator.
pub fn simplify(numerator: i128, denominator: i128) -> (i128, i128) {
    if numerator == 0 {
        return (0, 1);
    }

    let divisor = gcd(numerator, denominator);
    let (mut num, mut den) = (numerator / divisor, denominator / divisor);
    if den < 0 {
        num = -num;
        den = -den;
    }
    (num, den)
}

/// Greatest common divisor of the absolute values (Euclid).
pub fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn parse_digits(digits: &str) -> Result<i128, FractionError> {
    digits.parse().map_err(|_| FractionError::Unconvertible)
}

fn pow10(exp: usize) -> Result<i128, FractionError> {
    let exp = u32::try_from(exp).map_err(|_| FractionError::Unconvertible)?;
    10i128.checked_pow(exp).ok_or(FractionError::Unconvertible)
}

/// Errors produced by the fraction converter.
///
/// The `Display` text is the sentinel shown in place of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FractionError {
    #[error("NUMBER TOO LARGE")]
    TooLarge,

    #[error("FRACTION TOO COMPLEX")]
    TooComplex,

    #[error("CANNOT CONVERT TO FRACTION")]
    Unconvertible,
}
