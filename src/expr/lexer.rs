//! Tokenizer for calculator equations.
//!
//! Accepts decimal literals and the four binary operators, either as ASCII
//! (`+ - * /`) or as the glyphs the display uses (`× ÷ −`). Whitespace is
//! skipped.

use crate::expr::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in button order.
    pub const ALL: [Operator; 4] = [Operator::Div, Operator::Mul, Operator::Sub, Operator::Add];

    /// Parse an ASCII operator or its display glyph.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Sub),
            '*' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }

    /// The ASCII character stored in the equation buffer.
    pub const fn ascii(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// The character shown on the display.
    pub const fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '−',
            Operator::Mul => '×',
            Operator::Div => '÷',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(Operator),
}

/// Split an equation into tokens.
///
/// A literal is a run of digits with at most one decimal point and at least
/// one digit. Characters that are neither digits, `.`, operators nor
/// whitespace are rejected as [`CalcError::InvalidInput`].
pub fn tokenize(source: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if let Some(op) = Operator::from_char(c) {
            tokens.push(Token::Op(op));
            chars.next();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut end = start;
            while let Some(&(idx, d)) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    end = idx + d.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token::Number(parse_literal(&source[start..end])?));
            continue;
        }

        return Err(CalcError::InvalidInput);
    }

    Ok(tokens)
}

fn parse_literal(literal: &str) -> Result<f64, CalcError> {
    let points = literal.chars().filter(|&c| c == '.').count();
    let has_digit = literal.chars().any(|c| c.is_ascii_digit());
    if points > 1 || !has_digit {
        return Err(CalcError::SyntaxError);
    }
    literal.parse().map_err(|_| CalcError::SyntaxError)
}
