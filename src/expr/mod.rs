//! Arithmetic expressions typed into the calculator.
//!
//! This module provides:
//! - A lexer for the four-operator decimal language
//! - A structural validator run before evaluation
//! - A grammar gate over the tokens, with fasteval computing the `f64`
//! - Conversion between ASCII operators and their display glyphs

pub mod lexer;
pub mod validate;
pub mod eval;
mod error;

pub use error::CalcError;
pub use eval::{evaluate, MAX_MAGNITUDE};
pub use lexer::{tokenize, Operator, Token};
pub use validate::validate;

/// Render an equation with display glyphs (`×`, `÷`, `−`).
pub fn display_equation(equation: &str) -> String {
    equation
        .chars()
        .map(|c| Operator::from_char(c).map_or(c, Operator::glyph))
        .collect()
}

/// Is `c` one of the ASCII operator characters?
#[inline]
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}
