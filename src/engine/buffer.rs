//! The in-progress equation.

use crate::expr::{is_operator, Operator};
use std::fmt;

/// Characters typed so far, stored with ASCII operators.
///
/// Each operand may hold at most one decimal point; a second one is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquationBuffer {
    text: String,
}

impl EquationBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit, decimal point or operator.
    ///
    /// Display glyphs are stored as their ASCII operator. Returns `false` when
    /// the token was ignored.
    pub fn push(&mut self, token: char) -> bool {
        if let Some(op) = Operator::from_char(token) {
            self.text.push(op.ascii());
            return true;
        }

        match token {
            '0'..='9' => {
                self.text.push(token);
                true
            }
            '.' if !self.current_operand().contains('.') => {
                self.text.push('.');
                true
            }
            _ => false,
        }
    }

    /// Remove the last character, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The operand currently being typed (text after the last operator).
    pub fn current_operand(&self) -> &str {
        match self.text.rfind(is_operator) {
            Some(idx) => &self.text[idx + 1..],
            None => &self.text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for EquationBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
