//! Decimal display formatting.

/// Number of decimal places a non-integer result is rounded to.
pub const DISPLAY_PLACES: usize = 3;

/// Format a result for display.
///
/// Integral values print without a decimal point. Everything else is rounded
/// to [`DISPLAY_PLACES`] places (ties to even on the exact binary value) and
/// loses its trailing zeros.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value.fract() == 0.0 {
        return integer_string(value);
    }

    let rounded = format!("{:.*}", DISPLAY_PLACES, value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');

    // -0.0001 rounds to "-0.000"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render an integral float with all of its digits.
fn integer_string(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    format!("{:.0}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_large_integer_has_no_exponent() {
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.333");
        assert_eq!(format_number(2.0 / 3.0), "0.667");
        assert_eq!(format_number(-1.25), "-1.25");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0001), "1");
        assert_eq!(format_number(9.9999), "10");
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        // Both values are exactly representable, so these are true ties
        assert_eq!(format_number(0.0625), "0.062");
        assert_eq!(format_number(0.1875), "0.188");
    }

    #[test]
    fn test_half_thousandth_follows_binary_value() {
        // 1.0005 is stored just below the tie, 2.0005 and 0.0005 just above
        assert_eq!(format_number(1.0005), "1");
        assert_eq!(format_number(2.0005), "2.001");
        assert_eq!(format_number(0.0005), "0.001");
    }

    #[test]
    fn test_tiny_negative_rounds_to_zero() {
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
