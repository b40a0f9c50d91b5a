//! # deskcalc
//!
//! The arithmetic engine of a desktop calculator.
//!
//! Typed equations are validated, evaluated with standard precedence and
//! formatted for display. The last result can be shown in binary (with
//! fractional bits) or as a lowest-terms fraction, including repeating
//! decimals such as `0.333... = 1/3`.

pub mod expr;
pub mod number;
pub mod engine;
pub mod config;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use expr::{CalcError, Operator};
pub use number::{format_number, to_binary, to_fraction, BinaryError, FractionError};
pub use engine::{Conversion, Engine, Evaluation, History, HistoryEntry, Mode, ModeTicket};
pub use config::{Config, ConfigError};
pub use session::{Session, SessionEvent};

#[cfg(feature = "tui")]
pub use tui::run_calculator;
