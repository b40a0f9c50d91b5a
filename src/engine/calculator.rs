//! The calculator state owner.
//!
//! Implements the operations a front-end drives: editing the equation,
//! evaluating it, switching conversion mode and converting the last result.

use crate::config::Config;
use crate::engine::{ConvertMode, EquationBuffer, History, HistoryEntry, Mode, ModeTicket};
use crate::expr::{self, CalcError};
use crate::number::{format_number, to_binary, to_fraction};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// The equation with display glyphs.
    pub display_equation: String,
    /// The result as shown on the display.
    pub formatted_result: String,
    /// The raw value kept for conversions.
    pub value: f64,
}

/// Output of a conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Nothing has been evaluated yet.
    NoResult,
    /// Converter text, or its error sentinel.
    Output(String),
}

impl Conversion {
    pub fn output(&self) -> Option<&str> {
        match self {
            Conversion::NoResult => None,
            Conversion::Output(text) => Some(text),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::NoResult => f.write_str("NO RESULT YET"),
            Conversion::Output(text) => f.write_str(text),
        }
    }
}

/// The calculator engine.
///
/// `last_result` is `Some` exactly when the most recent terminal operation
/// was a successful evaluation.
#[derive(Debug, Clone)]
pub struct Engine {
    buffer: EquationBuffer,
    /// What the display shows as result: a formatted value, conversion or error.
    result: Option<String>,
    last_result: Option<f64>,
    history: History,
    mode: ConvertMode,
}

impl Engine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            buffer: EquationBuffer::new(),
            result: None,
            last_result: None,
            history: History::new(config.history_window),
            mode: ConvertMode::new(),
        }
    }

    /// Append a digit, decimal point or operator.
    ///
    /// Returns `false` if the token was ignored (a second decimal point in
    /// the current operand, or an unknown character).
    pub fn append_token(&mut self, token: char) -> bool {
        let accepted = self.buffer.push(token);
        if accepted {
            self.result = None;
        }
        accepted
    }

    /// Remove the last character and any stale result.
    pub fn backspace(&mut self) {
        self.buffer.pop();
        self.result = None;
    }

    /// Reset the equation, result and last value.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.result = None;
        self.last_result = None;
    }

    /// Validate and evaluate the equation.
    ///
    /// An empty equation is a no-op returning `Ok(None)`. On failure the
    /// equation and last value are cleared and the error message becomes the
    /// result display.
    pub fn evaluate(&mut self) -> Result<Option<Evaluation>, CalcError> {
        if self.buffer.is_empty() {
            return Ok(None);
        }

        let equation = self.buffer.as_str();
        let outcome = expr::validate(equation).and_then(|()| expr::evaluate(equation));

        match outcome {
            Ok(value) => {
                let evaluation = Evaluation {
                    display_equation: expr::display_equation(equation),
                    formatted_result: format_number(value),
                    value,
                };
                debug!(equation, result = %evaluation.formatted_result, "evaluated");

                self.last_result = Some(value);
                self.result = Some(evaluation.formatted_result.clone());
                self.history.push(HistoryEntry {
                    display_equation: evaluation.display_equation.clone(),
                    formatted_result: evaluation.formatted_result.clone(),
                });
                Ok(Some(evaluation))
            }
            Err(err) => {
                debug!(equation, error = %err, "evaluation failed");
                self.buffer.clear();
                self.last_result = None;
                self.result = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    /// Enter (or restart) conversion mode.
    ///
    /// Mode changes are crate-private: whoever calls these owns arming and
    /// cancelling the expiry for the returned ticket.
    pub(crate) fn enter_convert_mode(&mut self) -> ModeTicket {
        let ticket = self.mode.enter();
        info!(ticket = ticket.id(), "entered convert mode");
        ticket
    }

    /// Leave conversion mode.
    pub(crate) fn exit_convert_mode(&mut self) {
        self.mode.exit();
        info!("left convert mode");
    }

    /// The keypad's convert key: enter when in base mode, leave otherwise.
    pub(crate) fn toggle_convert_mode(&mut self) -> Option<ModeTicket> {
        let ticket = self.mode.toggle();
        match ticket {
            Some(ticket) => info!(ticket = ticket.id(), "entered convert mode"),
            None => info!("left convert mode"),
        }
        ticket
    }

    /// Apply an expiry for `ticket`. Stale tickets are ignored.
    pub(crate) fn expire_convert_mode(&mut self, ticket: ModeTicket) -> bool {
        let reverted = self.mode.expire(ticket);
        if reverted {
            info!(ticket = ticket.id(), "convert mode expired");
        } else {
            debug!(ticket = ticket.id(), "ignored stale expiry");
        }
        reverted
    }

    /// Show the last result in binary.
    pub fn convert_to_binary(&mut self) -> Conversion {
        self.convert(|value| to_binary(value).unwrap_or_else(|e| e.to_string()))
    }

    /// Show the last result as a fraction.
    pub fn convert_to_fraction(&mut self) -> Conversion {
        self.convert(|value| to_fraction(value).unwrap_or_else(|e| e.to_string()))
    }

    fn convert(&mut self, converter: impl Fn(f64) -> String) -> Conversion {
        let Some(value) = self.last_result else {
            return Conversion::NoResult;
        };
        let text = converter(value);
        debug!(value, output = %text, "converted");
        self.result = Some(text.clone());
        Conversion::Output(text)
    }

    /// The equation as typed (ASCII operators).
    pub fn equation(&self) -> &str {
        self.buffer.as_str()
    }

    /// The equation with display glyphs.
    pub fn display_equation(&self) -> String {
        expr::display_equation(self.buffer.as_str())
    }

    /// The string currently shown as result, if any.
    pub fn result_display(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// The most recent `limit` history entries, oldest first.
    pub fn recent_history(&self, limit: usize) -> &[HistoryEntry] {
        self.history.recent(limit)
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
