//! Structural checks run on the equation buffer before evaluation.
//!
//! Rules, in the order they are applied:
//! 1. An empty buffer passes.
//! 2. A trailing operator or `.` is an incomplete equation.
//! 3. A divisor written as a literal zero (`0`, `00`, `0.0`) divides by zero.
//! 4. Two adjacent operators are an invalid sequence.

use crate::expr::{is_operator, CalcError};

/// Validate a raw equation.
pub fn validate(equation: &str) -> Result<(), CalcError> {
    let Some(last) = equation.chars().last() else {
        return Ok(());
    };

    if is_operator(last) || last == '.' {
        return Err(CalcError::IncompleteEquation);
    }

    if divides_by_literal_zero(equation) {
        return Err(CalcError::DivisionByZero);
    }

    if has_adjacent_operators(equation) {
        return Err(CalcError::InvalidOperatorSequence);
    }

    Ok(())
}

/// Does any `/` have a divisor made only of zeros and decimal points?
fn divides_by_literal_zero(equation: &str) -> bool {
    equation.match_indices('/').any(|(idx, _)| {
        let divisor: String = equation[idx + 1..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        divisor.contains('0') && divisor.chars().all(|c| c == '0' || c == '.')
    })
}

fn has_adjacent_operators(equation: &str) -> bool {
    equation
        .chars()
        .zip(equation.chars().skip(1))
        .any(|(a, b)| is_operator(a) && is_operator(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passes() {
        assert_eq!(validate(""), Ok(()));
    }

    #[test]
    fn test_valid_equations() {
        assert_eq!(validate("1+2"), Ok(()));
        assert_eq!(validate("-3*4.5"), Ok(()));
        assert_eq!(validate("5/0.5"), Ok(()));
        assert_eq!(validate("10/05"), Ok(()));
        assert_eq!(validate("8/20"), Ok(()));
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(validate("2+"), Err(CalcError::IncompleteEquation));
        assert_eq!(validate("2*"), Err(CalcError::IncompleteEquation));
        assert_eq!(validate("3."), Err(CalcError::IncompleteEquation));
        assert_eq!(validate("-"), Err(CalcError::IncompleteEquation));
    }

    #[test]
    fn test_division_by_literal_zero() {
        assert_eq!(validate("5/0"), Err(CalcError::DivisionByZero));
        assert_eq!(validate("5/0+3"), Err(CalcError::DivisionByZero));
        assert_eq!(validate("1/2/0"), Err(CalcError::DivisionByZero));
        assert_eq!(validate("5/0.0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_adjacent_operators() {
        assert_eq!(validate("2++2"), Err(CalcError::InvalidOperatorSequence));
        assert_eq!(validate("2*-2"), Err(CalcError::InvalidOperatorSequence));
        assert_eq!(validate("5/-0"), Err(CalcError::InvalidOperatorSequence));
    }

    #[test]
    fn test_rule_order() {
        // Trailing operator wins over everything else
        assert_eq!(validate("5/0++"), Err(CalcError::IncompleteEquation));
        // Literal zero divisor is reported before the operator sequence
        assert_eq!(validate("5/0++2"), Err(CalcError::DivisionByZero));
    }
}
