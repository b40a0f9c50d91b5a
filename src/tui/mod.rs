//! Terminal front-end for the calculator.
//!
//! Provides an interactive keypad calculator with:
//! - Equation and result display
//! - Base / convert keypads with the convert key auto-expiring
//! - A history panel of recent evaluations

mod app;
mod ui;

pub use app::{Action, CalculatorApp, run_calculator};
