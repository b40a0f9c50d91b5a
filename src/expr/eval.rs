//! Expression evaluation using fasteval.
//!
//! The token stream is first checked against the calculator grammar:
//! ```text
//! expr    := operand (op operand)*
//! operand := ['+' | '-'] NUMBER         ; a single sign, no chaining
//! ```
//! A well-formed stream is rendered back into a canonical ASCII expression
//! and handed to fasteval, which applies the usual precedence and
//! left-to-right associativity. Every divisor is a single signed literal, so
//! zero divisors are caught on the tokens before anything is computed.

use crate::expr::lexer::{tokenize, Operator, Token};
use crate::expr::CalcError;
use std::collections::BTreeMap;
use tracing::debug;

/// Largest result (or literal) magnitude the calculator accepts.
pub const MAX_MAGNITUDE: f64 = 1e100;

/// One operand together with the operator that precedes it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Term {
    op: Option<Operator>,
    value: f64,
}

/// Evaluate an equation to a number.
///
/// The equation is expected to have passed [`validate`](crate::expr::validate),
/// but anything it lets through is still reported here rather than panicking.
pub fn evaluate(equation: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(equation)?;
    let terms = terms(&tokens)?;

    for term in &terms {
        if term.value.abs() > MAX_MAGNITUDE {
            return Err(CalcError::NumberTooLarge);
        }
        if term.op == Some(Operator::Div) && term.value == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
    }

    let expression = render(&terms);

    // No variables or custom functions
    let mut namespace = BTreeMap::<String, f64>::new();

    let value = fasteval::ez_eval(&expression, &mut namespace).map_err(|e| {
        debug!(expression, error = ?e, "fasteval rejected expression");
        CalcError::InvalidInput
    })?;

    check_range(value)
}

/// Check the grammar and fold each sign into its literal.
fn terms(tokens: &[Token]) -> Result<Vec<Term>, CalcError> {
    let mut iter = tokens.iter().copied();
    let mut terms = Vec::new();
    let mut op = None;

    loop {
        let value = match iter.next() {
            Some(Token::Number(n)) => n,
            Some(Token::Op(Operator::Sub)) => -literal(iter.next())?,
            Some(Token::Op(Operator::Add)) => literal(iter.next())?,
            _ => return Err(CalcError::SyntaxError),
        };
        terms.push(Term { op, value });

        match iter.next() {
            None => return Ok(terms),
            Some(Token::Op(next)) => op = Some(next),
            Some(Token::Number(_)) => return Err(CalcError::SyntaxError),
        }
    }
}

fn literal(token: Option<Token>) -> Result<f64, CalcError> {
    match token {
        Some(Token::Number(n)) => Ok(n),
        _ => Err(CalcError::SyntaxError),
    }
}

/// Render terms as an ASCII expression. Negative literals are parenthesized.
fn render(terms: &[Term]) -> String {
    let mut out = String::new();
    for term in terms {
        if let Some(op) = term.op {
            out.push(op.ascii());
        }
        if term.value.is_sign_negative() {
            out.push_str(&format!("({})", term.value));
        } else {
            out.push_str(&term.value.to_string());
        }
    }
    out
}

/// Reject results that cannot be displayed.
fn check_range(value: f64) -> Result<f64, CalcError> {
    if value.is_nan() {
        return Err(CalcError::InvalidInput);
    }
    if value.abs() > MAX_MAGNITUDE {
        return Err(CalcError::NumberTooLarge);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate("2+3").unwrap(), 5.0);
        assert_eq!(evaluate("2-3").unwrap(), -1.0);
        assert_eq!(evaluate("2*3").unwrap(), 6.0);
        assert_eq!(evaluate("3/2").unwrap(), 1.5);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("10-6/2").unwrap(), 7.0);
        assert_eq!(evaluate("1+2*3-4/2").unwrap(), 5.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10-4-3").unwrap(), 3.0);
        assert_eq!(evaluate("64/4/2").unwrap(), 8.0);
        assert_eq!(evaluate("8/2*4").unwrap(), 16.0);
    }

    #[test]
    fn test_leading_sign() {
        assert_eq!(evaluate("-5+3").unwrap(), -2.0);
        assert_eq!(evaluate("+5").unwrap(), 5.0);
        assert_eq!(evaluate("2*-3").unwrap(), -6.0);
        assert_eq!(evaluate("4--2").unwrap(), 6.0);
    }

    #[test]
    fn test_sign_chaining_rejected() {
        assert_eq!(evaluate("--5"), Err(CalcError::SyntaxError));
        assert_eq!(evaluate("2*--5"), Err(CalcError::SyntaxError));
    }

    #[test]
    fn test_glyph_operators() {
        assert_eq!(evaluate("6×7−2÷1").unwrap(), 40.0);
    }

    #[test]
    fn test_partial_literals() {
        assert_eq!(evaluate(".5+5.").unwrap(), 5.5);
    }

    #[test]
    fn test_division_by_zero_literal() {
        assert_eq!(evaluate("5/0.0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("1/0*3"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("1/-0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(evaluate(""), Err(CalcError::SyntaxError));
        assert_eq!(evaluate("2+"), Err(CalcError::SyntaxError));
        assert_eq!(evaluate("*2"), Err(CalcError::SyntaxError));
        assert_eq!(evaluate("1 2"), Err(CalcError::SyntaxError));
    }

    #[test]
    fn test_too_large() {
        assert_eq!(evaluate("1e"), Err(CalcError::InvalidInput));
        let big = format!("1{}", "0".repeat(60));
        assert_eq!(evaluate(&format!("{}*{}", big, big)), Err(CalcError::NumberTooLarge));
        assert!(evaluate(&format!("{}*{}", big, "1")).is_ok());
    }

    #[test]
    fn test_oversized_literal() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(evaluate(&huge), Err(CalcError::NumberTooLarge));
        assert_eq!(evaluate(&format!("{}-{}", huge, huge)), Err(CalcError::NumberTooLarge));
    }

    #[test]
    fn test_render_parenthesizes_negatives() {
        let terms = terms(&tokenize("-1.5*-2").unwrap()).unwrap();
        assert_eq!(render(&terms), "(-1.5)*(-2)");
    }
}
